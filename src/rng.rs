/// Pluggable randomness for shoot rolls, UFO spawns and UFO rewards.
///
/// Any `rand::RngCore` works as a source, so callers can pass `thread_rng()`
/// in play and a seeded `StdRng` in tests. `ScriptedRandom` replays an exact
/// sequence of draws for tests that need to pin individual outcomes.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays queued samples in order, then repeats `fallback` once drained.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    queued: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        ScriptedRandom {
            queued: samples.into_iter().collect(),
            fallback: 0.999_999,
        }
    }

    /// A source whose every draw is `value`.
    pub fn constant(value: f64) -> Self {
        ScriptedRandom {
            queued: VecDeque::new(),
            fallback: value,
        }
    }

    /// Never rolls under any chance below one: no shots, no UFO.
    pub fn quiet() -> Self {
        Self::constant(0.999_999)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.queued.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}
