//! Uniform random seed fields.

use crate::{
    Layout, NoiseError, NoiseField, NoiseFloat, NoiseParameters, Result,
    linear, spatial,
};
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::SmallRng,
};
use tracing::debug;

/// Independent uniform samples in `[0, 1)` that noise is synthesized from.
///
/// A seed field is immutable once created. Keep it around to re-synthesize
/// with different octave counts or biases; create a new one whenever the
/// resolution changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedField<T = f32> {
    layout: Layout,
    values: Vec<T>,
}

/// Generates a 1D seed field of `count` elements.
///
/// Fails with [`NoiseError::InvalidSize`] if `count` is zero.
pub fn generate<T, R>(count: usize, rng: &mut R) -> Result<SeedField<T>>
where
    T: NoiseFloat,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    SeedField::generate(Layout::Linear(count), rng)
}

impl<T> SeedField<T>
where
    T: NoiseFloat,
    StandardUniform: Distribution<T>,
{
    /// Fills a field of the given layout with samples drawn from `rng`.
    ///
    /// ```
    /// use octave_noise::{Layout, SeedField};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let seed = SeedField::<f64>::generate(Layout::Linear(128), &mut rng)?;
    ///
    /// assert_eq!(seed.len(), 128);
    /// assert!(seed.iter().all(|&v| (0.0..1.0).contains(&v)));
    /// # Ok::<(), octave_noise::NoiseError>(())
    /// ```
    pub fn generate<R: Rng>(layout: Layout, rng: &mut R) -> Result<Self> {
        let len = layout.validate()?;
        let values = (0..len).map(|_| rng.random::<T>()).collect();

        debug!(?layout, len, "generated seed field");

        Ok(Self { layout, values })
    }

    /// Deterministic seed field; the same `seed` always yields the same
    /// values.
    pub fn from_seed(layout: Layout, seed: u64) -> Result<Self> {
        Self::generate(layout, &mut SmallRng::seed_from_u64(seed))
    }

    /// Seed field drawn from the thread-local generator.
    pub fn from_entropy(layout: Layout) -> Result<Self> {
        Self::generate(layout, &mut rand::rng())
    }
}

impl<T: NoiseFloat> SeedField<T> {
    /// Wraps caller-provided values.
    ///
    /// `values` must hold exactly `layout.len()` elements, each in `[0, 1)`.
    pub fn from_values(layout: Layout, values: Vec<T>) -> Result<Self> {
        let expected = layout.validate()?;
        if values.len() != expected {
            return Err(NoiseError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }

        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v >= T::zero() && v < T::one()))
        {
            return Err(NoiseError::SeedOutOfRange {
                index,
                value: value.widen(),
            });
        }

        Ok(Self { layout, values })
    }

    /// Synthesizes noise with the synthesizer matching this field's layout.
    pub fn synthesize(
        &self,
        parameters: &NoiseParameters<T>,
    ) -> Result<NoiseField<T>> {
        match self.layout {
            Layout::Linear(_) => {
                linear::synthesize(self, parameters.octaves, parameters.bias)
            }
            Layout::Spatial { width, height } => spatial::synthesize(
                self,
                width,
                height,
                parameters.octaves,
                parameters.bias,
            ),
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> AsRef<[T]> for SeedField<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            generate::<f32, _>(0, &mut rng),
            Err(NoiseError::InvalidSize {
                width: 0,
                height: 1
            })
        );
    }

    #[test]
    fn same_seed_same_values() {
        let layout = Layout::Spatial {
            width: 32,
            height: 32,
        };
        let a = SeedField::<f32>::from_seed(layout, 99).unwrap();
        let b = SeedField::<f32>::from_seed(layout, 99).unwrap();
        let c = SeedField::<f32>::from_seed(layout, 100).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 1024);
    }

    #[test]
    fn from_values_checks_shape_and_range() {
        let layout = Layout::Linear(4);

        assert!(SeedField::from_values(layout, vec![0.0f32, 0.5, 0.25, 0.9])
            .is_ok());
        assert_eq!(
            SeedField::from_values(layout, vec![0.0f32; 3]),
            Err(NoiseError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            SeedField::from_values(layout, vec![0.0f32, 1.0, 0.0, 0.0]),
            Err(NoiseError::SeedOutOfRange {
                index: 1,
                value: 1.0
            })
        );
        assert!(matches!(
            SeedField::from_values(layout, vec![0.0f32, 0.0, f32::NAN, 0.0]),
            Err(NoiseError::SeedOutOfRange { index: 2, .. })
        ));
    }
}
