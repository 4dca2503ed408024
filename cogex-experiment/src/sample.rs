use cogex_core::{CogexError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draws exactly `num` items from `sample`, like sampling without
/// replacement but allowed to exceed the sample size.
///
/// When `num` fits in the sample a random subset is returned. Otherwise the
/// whole sample is repeated as many times as fits and the remainder is a
/// random subset, so every item appears at least `num / len` times.
pub fn grow_sample<T, R>(sample: &[T], num: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if num <= sample.len() {
        return Ok(sample.choose_multiple(rng, num).cloned().collect());
    }
    if sample.is_empty() {
        return Err(CogexError::EmptySample { requested: num });
    }
    let tiles = num / sample.len();
    let rem = num % sample.len();
    let mut grown = Vec::with_capacity(num);
    for _ in 0..tiles {
        grown.extend_from_slice(sample);
    }
    grown.extend(sample.choose_multiple(rng, rem).cloned());
    Ok(grown)
}
