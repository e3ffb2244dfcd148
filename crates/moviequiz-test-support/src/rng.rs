//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use moviequiz_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific draws.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays scripted draws. Integer draws are clamped into the
/// requested range; once a script runs out it keeps returning its last value
/// (or `min` / `0.0` if it was empty).
#[derive(Debug, Default)]
pub struct SequenceRng {
    ints: Vec<u32>,
    floats: Vec<f64>,
    int_index: usize,
    float_index: usize,
}

impl SequenceRng {
    /// Create a `SequenceRng` with scripted integer draws.
    #[must_use]
    pub fn new(ints: Vec<u32>) -> Self {
        Self {
            ints,
            ..Self::default()
        }
    }

    /// Script the `next_f64` draws as well.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats;
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let Some(last) = self.ints.len().checked_sub(1) else {
            return min;
        };
        let val = self.ints[self.int_index.min(last)];
        self.int_index += 1;
        val.clamp(min, max)
    }

    fn next_f64(&mut self) -> f64 {
        let Some(last) = self.floats.len().checked_sub(1) else {
            return 0.0;
        };
        let val = self.floats[self.float_index.min(last)];
        self.float_index += 1;
        val
    }
}
