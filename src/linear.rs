//! 1D noise synthesis.
//!
//! Each output element is the weighted sum of one sample per octave. For
//! octave `j` the seed is only read every `pitch = len >> j` elements; the
//! elements in between are linearly interpolated from the two nearest of
//! those points. The point after the last one wraps back to index `0`, so
//! the resulting noise is periodic with period `len`.

use crate::{
    Layout, NoiseField, NoiseFloat, NoiseParameters, OctaveWeights, Result,
    SeedField, lerp,
};
use tracing::debug;

/// Synthesizes 1D noise from `seed`, treating it as a flat sequence.
///
/// `octaves` must lie in `1..=max_octaves(seed.len())` and `bias` must be
/// finite and positive; both are checked before any work is done. The result
/// has a [`Layout::Linear`] of the seed's length.
///
/// A power-of-two length gives evenly sized segments in every octave. Other
/// lengths work but the truncated pitch makes the last segment of an octave
/// shorter than the rest.
///
/// ```
/// use octave_noise::{Layout, SeedField, linear};
///
/// let seed = SeedField::from_values(Layout::Linear(4), vec![0.0f32, 0.5, 0.0, 0.5])?;
///
/// // One octave over four elements: pitch 4, every element interpolates
/// // from seed[0] towards seed[0].
/// let noise = linear::synthesize(&seed, 1, 2.0)?;
/// assert_eq!(noise.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
/// # Ok::<(), octave_noise::NoiseError>(())
/// ```
pub fn synthesize<T: NoiseFloat>(
    seed: &SeedField<T>,
    octaves: u32,
    bias: T,
) -> Result<NoiseField<T>> {
    let layout = Layout::Linear(seed.len());
    let weights = NoiseParameters::new(octaves, bias).weights_for(&layout)?;

    debug!(
        len = seed.len(),
        octaves,
        bias = bias.widen(),
        "synthesizing 1D noise"
    );

    let values = seed.as_slice();
    let noise = (0..values.len())
        .map(|index| sample(values, index, &weights))
        .collect();

    Ok(NoiseField::new(layout, noise))
}

#[inline]
fn sample<T: NoiseFloat>(
    seed: &[T],
    index: usize,
    weights: &OctaveWeights<T>,
) -> T {
    let len = seed.len();

    let sum = weights.iter().fold(T::zero(), |value, (octave, weight)| {
        let pitch = len >> octave;

        let first = (index / pitch) * pitch;
        let second = (first + pitch) % len;
        let t = T::from_index(index - first) / T::from_index(pitch);

        value + lerp(seed[first], seed[second], t) * weight
    });

    weights.normalize(sum)
}
