//! Octave-summed value noise in one and two dimensions.
//!
//! A uniformly random [`SeedField`] is turned into a smooth [`NoiseField`] by
//! sampling the seed at a coarse spacing (the *pitch*), interpolating linearly
//! between those samples, and adding the result of ever finer pitches on top.
//! Every octave halves the pitch; its weight is the previous weight divided
//! by the *bias*. The sum is normalized by the total weight, which keeps the
//! output inside `[0, 1)`.
//!
//! The noise is sometimes called "Perlin noise" but it is plain value noise:
//! there are no gradient vectors involved.
//!
//! Sample positions wrap around the end of the field, so the result tiles.
//!
//! # Example
//!
//! ```
//! use octave_noise::{Layout, NoiseParameters, SeedField};
//!
//! let layout = Layout::spatial(64, 64)?;
//! let seed = SeedField::<f32>::from_seed(layout, 42)?;
//!
//! let noise = seed.synthesize(&NoiseParameters::new(5, 2.0))?;
//! assert_eq!(noise.len(), 64 * 64);
//! assert!(noise.iter().all(|&v| (0.0..1.0).contains(&v)));
//! # Ok::<(), octave_noise::NoiseError>(())
//! ```
//!
//! # Features
//!
//! * `image` (default) -- [`render`] noise fields into `image::RgbImage`s.
//! * `serde` -- `Serialize`/`Deserialize` for [`Layout`] and
//!   [`NoiseParameters`].

use core::fmt::Debug;
use num_traits::float::Float;

mod error;
mod generator;
pub mod linear;
pub mod palette;
#[cfg(feature = "image")]
pub mod render;
mod seed;
pub mod spatial;

pub use error::{NoiseError, Result};
pub use generator::NoiseGenerator;
pub use palette::{ColorBucket, map_to_gray};
pub use seed::{SeedField, generate};

/// Weight divisor used when nothing else is configured.
pub const DEFAULT_BIAS: f32 = 2.0;

/// Float types noise can be computed in.
pub trait NoiseFloat: Float + Debug + Send + Sync + 'static {
    /// Converts an element offset or pitch.
    fn from_index(index: usize) -> Self;

    /// Widens to `f64`, for diagnostics and pixel math.
    fn widen(self) -> f64;
}

impl NoiseFloat for f32 {
    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as f32
    }

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl NoiseFloat for f64 {
    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as f64
    }

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }
}

/// Shape of a seed or noise field.
///
/// Spatial fields are stored row-major, the element at `(x, y)` lives at
/// `y * width + x`. The pitch of every octave is derived from the field's
/// [`resolution()`](Layout::resolution): the length of a linear field or the
/// width of a spatial one. Power-of-two, square fields give the most regular
/// results; other shapes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// A 1D field of `n` elements.
    Linear(usize),
    /// A 2D field.
    Spatial { width: usize, height: usize },
}

impl Layout {
    /// Creates a validated 1D layout.
    pub fn linear(len: usize) -> Result<Self> {
        let layout = Layout::Linear(len);
        layout.validate()?;
        Ok(layout)
    }

    /// Creates a validated 2D layout.
    pub fn spatial(width: usize, height: usize) -> Result<Self> {
        let layout = Layout::Spatial { width, height };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks that the layout describes a non-empty, addressable field and
    /// returns its element count.
    pub fn validate(&self) -> Result<usize> {
        let (width, height) = (self.width(), self.height());
        match width.checked_mul(height) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(NoiseError::InvalidSize { width, height }),
        }
    }

    /// Elements per row; the length of a linear layout.
    #[inline]
    pub fn width(&self) -> usize {
        match *self {
            Layout::Linear(len) => len,
            Layout::Spatial { width, .. } => width,
        }
    }

    /// Number of rows; `1` for a linear layout.
    #[inline]
    pub fn height(&self) -> usize {
        match *self {
            Layout::Linear(_) => 1,
            Layout::Spatial { height, .. } => height,
        }
    }

    /// Number of elements. Saturates for layouts that fail
    /// [`validate()`](Layout::validate).
    #[inline]
    pub fn len(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The extent the octave pitch is derived from.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.width()
    }

    /// Largest octave count this layout supports.
    pub fn max_octaves(&self) -> u32 {
        max_octaves(self.resolution())
    }
}

/// Largest octave count for a resolution: the number of times the pitch can
/// be halved before it reaches zero.
///
/// ```
/// assert_eq!(octave_noise::max_octaves(256), 9);
/// assert_eq!(octave_noise::max_octaves(300), 9);
/// assert_eq!(octave_noise::max_octaves(1), 1);
/// assert_eq!(octave_noise::max_octaves(0), 0);
/// ```
pub fn max_octaves(resolution: usize) -> u32 {
    match resolution {
        0 => 0,
        r => r.ilog2() + 1,
    }
}

/// Parameters shared by both synthesizers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseParameters<T = f32> {
    /// Number of octaves summed, at least one.
    pub octaves: u32,
    /// Divisor applied to the weight of each successive octave. Larger
    /// values fade fine detail out faster and give smoother noise.
    pub bias: T,
}

impl<T> NoiseParameters<T> {
    pub const fn new(octaves: u32, bias: T) -> Self {
        Self { octaves, bias }
    }
}

impl<T: NoiseFloat> NoiseParameters<T> {
    /// Checks the parameters against a layout.
    ///
    /// The layout must be valid, `octaves` must lie in
    /// `1..=layout.max_octaves()` and `bias` must be finite and positive.
    pub fn validate_for(&self, layout: &Layout) -> Result<()> {
        self.weights_for(layout).map(|_| ())
    }

    pub(crate) fn weights_for(
        &self,
        layout: &Layout,
    ) -> Result<OctaveWeights<T>> {
        layout.validate()?;

        let max = layout.max_octaves();
        if self.octaves == 0 || self.octaves > max {
            return Err(NoiseError::InvalidOctaveCount {
                octaves: self.octaves,
                max,
            });
        }

        OctaveWeights::new(self.octaves, self.bias)
    }
}

impl<T: NoiseFloat> Default for NoiseParameters<T> {
    fn default() -> Self {
        Self {
            octaves: 1,
            bias: T::one() + T::one(),
        }
    }
}

/// Per-octave weights and their sum.
///
/// Computed once per synthesis call; every element uses the same sequence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OctaveWeights<T> {
    weights: Vec<T>,
    total: T,
}

impl<T: NoiseFloat> OctaveWeights<T> {
    fn new(octaves: u32, bias: T) -> Result<Self> {
        if !(bias.is_finite() && bias > T::zero()) {
            return Err(NoiseError::InvalidBias(bias.widen()));
        }

        let mut weights = Vec::with_capacity(octaves as usize);
        let mut weight = T::one();
        let mut total = T::zero();
        for _ in 0..octaves {
            weights.push(weight);
            total = total + weight;
            weight = weight / bias;
        }

        // Tiny biases blow the weights up past the float range.
        if !total.is_finite() {
            return Err(NoiseError::InvalidBias(bias.widen()));
        }

        Ok(Self { weights, total })
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, T)> + '_ {
        (0u32..).zip(self.weights.iter().copied())
    }

    #[inline(always)]
    pub(crate) fn total(&self) -> T {
        self.total
    }

    /// Divides a weighted sum by the total weight.
    ///
    /// Rounding in the per-octave sums can land a seed close to `1.0` on
    /// exactly `1.0`; the result is capped just below it.
    #[inline(always)]
    pub(crate) fn normalize(&self, sum: T) -> T {
        (sum / self.total()).min(below_one())
    }
}

/// Largest float below `1.0`.
#[inline(always)]
pub(crate) fn below_one<T: NoiseFloat>() -> T {
    T::one() - T::epsilon() / (T::one() + T::one())
}

#[inline(always)]
pub(crate) fn lerp<T: NoiseFloat>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// A synthesized noise field.
///
/// Has the same shape as the seed it was computed from; values lie in
/// `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField<T = f32> {
    layout: Layout,
    values: Vec<T>,
}

impl<T: NoiseFloat> NoiseField<T> {
    pub(crate) fn new(layout: Layout, values: Vec<T>) -> Self {
        debug_assert_eq!(layout.len(), values.len());
        Self { layout, values }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `(x, y)`; linear fields only have row `0`.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.values.get(y * self.width() + x).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterates over the rows of the field.
    pub fn rows(&self) -> core::slice::Chunks<'_, T> {
        self.values.chunks(self.width())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> AsRef<[T]> for NoiseField<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}
