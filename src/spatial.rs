//! 2D noise synthesis.
//!
//! Works like the [1D synthesizer](crate::linear) on both axes at once. Per
//! octave the four pitch-aligned corners around a pixel are looked up, the
//! top and bottom pairs are interpolated horizontally and those two results
//! are blended vertically.
//!
//! The pitch is derived from the field's width and applied to both axes,
//! so square power-of-two fields give the intended look. Corner coordinates
//! past the right or bottom edge wrap around, which makes the noise tile in
//! both directions.

use crate::{
    Layout, NoiseError, NoiseField, NoiseFloat, NoiseParameters,
    OctaveWeights, Result, SeedField, lerp,
};
use tracing::debug;

/// Synthesizes 2D noise from a `width` × `height` row-major `seed`.
///
/// `octaves` must lie in `1..=max_octaves(width)` and `bias` must be finite
/// and positive. The seed must hold exactly `width * height` values,
/// otherwise [`NoiseError::ShapeMismatch`] is returned.
///
/// ```
/// use octave_noise::{Layout, SeedField, spatial};
///
/// let seed = SeedField::<f32>::from_seed(Layout::spatial(32, 32)?, 1)?;
/// let noise = spatial::synthesize(&seed, 32, 32, 4, 2.0)?;
///
/// assert_eq!((noise.width(), noise.height()), (32, 32));
/// # Ok::<(), octave_noise::NoiseError>(())
/// ```
pub fn synthesize<T: NoiseFloat>(
    seed: &SeedField<T>,
    width: usize,
    height: usize,
    octaves: u32,
    bias: T,
) -> Result<NoiseField<T>> {
    let layout = Layout::Spatial { width, height };
    let expected = layout.validate()?;
    if seed.len() != expected {
        return Err(NoiseError::ShapeMismatch {
            expected,
            actual: seed.len(),
        });
    }
    let weights = NoiseParameters::new(octaves, bias).weights_for(&layout)?;

    debug!(
        width,
        height,
        octaves,
        bias = bias.widen(),
        "synthesizing 2D noise"
    );

    let values = seed.as_slice();
    let mut noise = Vec::with_capacity(expected);
    for y in 0..height {
        for x in 0..width {
            noise.push(sample(values, width, height, x, y, &weights));
        }
    }

    Ok(NoiseField::new(layout, noise))
}

#[inline]
fn sample<T: NoiseFloat>(
    seed: &[T],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    weights: &OctaveWeights<T>,
) -> T {
    let sum = weights.iter().fold(T::zero(), |value, (octave, weight)| {
        let pitch = width >> octave;

        let x1 = (x / pitch) * pitch;
        let y1 = (y / pitch) * pitch;
        let x2 = (x1 + pitch) % width;
        let y2 = (y1 + pitch) % height;

        let tx = T::from_index(x - x1) / T::from_index(pitch);
        let ty = T::from_index(y - y1) / T::from_index(pitch);

        let top = lerp(seed[y1 * width + x1], seed[y1 * width + x2], tx);
        let bottom = lerp(seed[y2 * width + x1], seed[y2 * width + x2], tx);

        value + (ty * (bottom - top) + top) * weight
    });

    weights.normalize(sum)
}
