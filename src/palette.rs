//! Quantization of noise values into a fixed gray palette.

use crate::{NoiseField, NoiseFloat};

/// Gray level of every bucket, lightest first. The last entry is the
/// catch-all for values of `1.0` and above.
pub const GRAY_LEVELS: [u8; ColorBucket::COUNT] =
    [208, 190, 176, 168, 160, 136, 120, 105, 96, 80, 64, 48, 24];

/// One of 13 gray levels a noise value is quantized to.
///
/// Bucket `0` is the lightest, [`ColorBucket::DEFAULT`] (`12`) the darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorBucket(u8);

impl ColorBucket {
    pub const COUNT: usize = 13;
    pub const LIGHTEST: Self = Self(0);
    /// Darkest bucket, only reached by values of `1.0` and above.
    pub const DEFAULT: Self = Self(12);

    /// Bucket for an index, saturating at [`ColorBucket::DEFAULT`].
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index.min(Self::DEFAULT.0 as usize) as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    #[inline]
    pub fn gray(self) -> u8 {
        GRAY_LEVELS[self.index()]
    }

    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        let gray = self.gray();
        [gray, gray, gray]
    }
}

/// Maps a noise value to its bucket, `floor(value * 12)`.
///
/// Total over all floats: negative values and NaN land in bucket `0`,
/// anything at or above `1.0` (including infinity) in
/// [`ColorBucket::DEFAULT`].
///
/// ```
/// use octave_noise::{ColorBucket, palette};
///
/// assert_eq!(palette::map(0.0f32), ColorBucket::LIGHTEST);
/// assert_eq!(palette::map(0.5f32).index(), 6);
/// assert_eq!(palette::map(1.0f32), ColorBucket::DEFAULT);
/// ```
pub fn map<T: NoiseFloat>(value: T) -> ColorBucket {
    let scaled = (value.max(T::zero()) * T::from_index(12)).floor();

    scaled
        .to_usize()
        .map_or(ColorBucket::DEFAULT, ColorBucket::from_index)
}

/// Maps every value of a field, in storage order.
pub fn map_to_gray<T: NoiseFloat>(field: &NoiseField<T>) -> Vec<ColorBucket> {
    field.iter().map(|&value| map(value)).collect()
}
