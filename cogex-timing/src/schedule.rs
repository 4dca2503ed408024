use cogex_core::{CogexError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Slack added to `end` so a step landing on it after float drift still
/// counts as inside the range.
const END_TOLERANCE: f64 = 1e-6;

/// Balanced set of timing values, e.g. fixation durations in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeShuffle {
    pub start: f64,
    /// Inclusive upper bound.
    pub end: f64,
    pub every: f64,
    /// How many times each value is used.
    pub times: usize,
    pub shuffle: bool,
}

impl Default for TimeShuffle {
    fn default() -> Self {
        Self {
            start: 1.5,
            end: 5.0,
            every: 0.05,
            times: 6,
            shuffle: true,
        }
    }
}

impl TimeShuffle {
    /// The values `start, start + every, ..` up to and including `end`.
    pub fn levels(&self) -> Result<Vec<f64>> {
        if !(self.every.is_finite() && self.every > 0.0) {
            return Err(CogexError::InvalidStep { step: self.every });
        }
        let span = self.end + END_TOLERANCE - self.start;
        let count = if span > 0.0 {
            (span / self.every).ceil() as usize
        } else {
            0
        };
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.every)
            .collect())
    }
}

/// Repeats every level of `plan` `plan.times` times, shuffling the result
/// with `rng` when `plan.shuffle` is set.
pub fn time_shuffle<R: Rng + ?Sized>(plan: &TimeShuffle, rng: &mut R) -> Result<Vec<f64>> {
    let levels = plan.levels()?;
    let mut values = Vec::with_capacity(levels.len() * plan.times);
    for _ in 0..plan.times {
        values.extend_from_slice(&levels);
    }
    if plan.shuffle {
        values.shuffle(rng);
    }
    Ok(values)
}
