//! Stateful generation session for interactive front ends.

use crate::{Layout, NoiseField, NoiseParameters, Result, SeedField};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::trace;

/// Holds the current layout, parameters and seed of an interactive session.
///
/// [`generate()`](NoiseGenerator::generate) draws a fresh seed and
/// synthesizes it. [`refresh()`](NoiseGenerator::refresh) re-synthesizes the
/// existing seed, which is what a front end calls while the user drags an
/// octave or bias control. Changing the layout discards the seed since its
/// size is tied to the resolution.
///
/// ```
/// use octave_noise::{Layout, NoiseGenerator, NoiseParameters};
///
/// let mut generator = NoiseGenerator::with_seed(
///     42,
///     Layout::Linear(256),
///     NoiseParameters::new(4, 2.0),
/// )?;
///
/// let first = generator.generate()?;
///
/// generator.set_bias(5.0)?;
/// let smoother = generator.refresh()?;
/// assert_eq!(first.len(), smoother.len());
///
/// // A layout change is validated against the current octave count.
/// assert!(generator.set_parameters(Layout::Linear(4), 4, 2.0).is_err());
/// # Ok::<(), octave_noise::NoiseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NoiseGenerator<R = SmallRng> {
    rng: R,
    layout: Layout,
    parameters: NoiseParameters<f32>,
    seed: Option<SeedField<f32>>,
}

impl NoiseGenerator<SmallRng> {
    /// Session with a generator seeded from the thread-local RNG.
    pub fn new(
        layout: Layout,
        parameters: NoiseParameters<f32>,
    ) -> Result<Self> {
        let rng = SmallRng::from_rng(&mut rand::rng());
        Self::with_rng(rng, layout, parameters)
    }

    /// Reproducible session: the same `seed` yields the same sequence of
    /// seed fields.
    pub fn with_seed(
        seed: u64,
        layout: Layout,
        parameters: NoiseParameters<f32>,
    ) -> Result<Self> {
        Self::with_rng(SmallRng::seed_from_u64(seed), layout, parameters)
    }
}

impl<R: Rng> NoiseGenerator<R> {
    /// Creates a new session drawing its seeds from `rng`.
    pub fn with_rng(
        rng: R,
        layout: Layout,
        parameters: NoiseParameters<f32>,
    ) -> Result<Self> {
        parameters.validate_for(&layout)?;

        Ok(Self {
            rng,
            layout,
            parameters,
            seed: None,
        })
    }

    /// Replaces layout and parameters.
    ///
    /// Nothing changes if validation fails. A different layout drops the
    /// current seed; the next [`refresh()`](NoiseGenerator::refresh) draws a
    /// new one.
    pub fn set_parameters(
        &mut self,
        layout: Layout,
        octaves: u32,
        bias: f32,
    ) -> Result<()> {
        let parameters = NoiseParameters::new(octaves, bias);
        parameters.validate_for(&layout)?;

        if layout != self.layout {
            trace!(
                from = ?self.layout,
                to = ?layout,
                "layout changed, dropping seed"
            );
            self.seed = None;
            self.layout = layout;
        }
        self.parameters = parameters;

        Ok(())
    }

    /// Changes the octave count, keeping layout and bias.
    pub fn set_octaves(&mut self, octaves: u32) -> Result<()> {
        self.set_parameters(self.layout, octaves, self.parameters.bias)
    }

    /// Changes the bias, keeping layout and octave count.
    pub fn set_bias(&mut self, bias: f32) -> Result<()> {
        self.set_parameters(self.layout, self.parameters.octaves, bias)
    }

    /// Draws a new seed and synthesizes it.
    pub fn generate(&mut self) -> Result<NoiseField<f32>> {
        // Release the old buffer before allocating its replacement.
        self.seed = None;

        let seed = SeedField::generate(self.layout, &mut self.rng)?;
        let noise = seed.synthesize(&self.parameters)?;
        self.seed = Some(seed);

        Ok(noise)
    }

    /// Re-synthesizes the current seed with the current parameters, drawing
    /// a seed first if there is none.
    pub fn refresh(&mut self) -> Result<NoiseField<f32>> {
        if let Some(seed) = &self.seed {
            return seed.synthesize(&self.parameters);
        }

        self.generate()
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn parameters(&self) -> NoiseParameters<f32> {
        self.parameters
    }

    #[inline]
    pub fn seed(&self) -> Option<&SeedField<f32>> {
        self.seed.as_ref()
    }

    /// Upper bound for the octave count with the current layout.
    #[inline]
    pub fn max_octaves(&self) -> u32 {
        self.layout.max_octaves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseError;

    fn generator() -> NoiseGenerator {
        NoiseGenerator::with_seed(
            7,
            Layout::Linear(128),
            NoiseParameters::new(3, 2.0),
        )
        .unwrap()
    }

    #[test]
    fn refresh_reuses_seed() {
        let mut generator = generator();
        let generated = generator.generate().unwrap();
        let seed = generator.seed().cloned().unwrap();

        let refreshed = generator.refresh().unwrap();
        assert_eq!(generated, refreshed);

        generator.set_octaves(7).unwrap();
        generator.refresh().unwrap();
        assert_eq!(generator.seed(), Some(&seed));
    }

    #[test]
    fn layout_change_drops_seed() {
        let mut generator = generator();
        generator.generate().unwrap();

        generator
            .set_parameters(Layout::Linear(128), 3, 4.0)
            .unwrap();
        assert!(generator.seed().is_some());

        generator
            .set_parameters(Layout::spatial(64, 64).unwrap(), 3, 4.0)
            .unwrap();
        assert!(generator.seed().is_none());

        let noise = generator.refresh().unwrap();
        assert_eq!(
            noise.layout(),
            Layout::Spatial {
                width: 64,
                height: 64
            }
        );
        assert_eq!(generator.seed().map(SeedField::len), Some(4096));
    }

    #[test]
    fn rejected_parameters_leave_state_untouched() {
        let mut generator = generator();
        generator.generate().unwrap();
        let before = generator.parameters();

        assert_eq!(
            generator.set_octaves(9),
            Err(NoiseError::InvalidOctaveCount { octaves: 9, max: 8 })
        );
        assert_eq!(
            generator.set_bias(-1.0),
            Err(NoiseError::InvalidBias(-1.0))
        );
        assert!(
            generator
                .set_parameters(Layout::Linear(0), 1, 2.0)
                .is_err()
        );

        assert_eq!(generator.parameters(), before);
        assert_eq!(generator.layout(), Layout::Linear(128));
        assert!(generator.seed().is_some());
    }

    #[test]
    fn generate_draws_new_seed() {
        let mut generator = generator();
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        assert_ne!(first, second);
    }
}
