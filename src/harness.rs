//! Measurement harness: configuration, warm-up, and the timed trial loop.

use std::hint::black_box;
use std::time::Instant;

use serde::Serialize;

use crate::kernels::{predictable_loop, unpredictable_loop};
use crate::random::BitSource;

/// Probes taken when estimating clock granularity.
const RESOLUTION_PROBES: usize = 16;

/// Run configuration, validated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Loop bound for both kernels.
    pub size: i64,
    /// Number of repeated measurement trials.
    pub trials: i64,
    /// Deterministic RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.size <= 0 || self.trials <= 0 {
            return Err(format!(
                "--size and --trials must be positive integers (got size={}, trials={})",
                self.size, self.trials
            ));
        }
        Ok(())
    }

    pub fn bit_source(&self) -> BitSource {
        match self.seed {
            Some(seed) => BitSource::seeded(seed),
            None => BitSource::from_entropy(),
        }
    }
}

/// One timed trial: both kernels measured back to back on the same thread.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimingSample {
    /// 1-based trial index, in execution order.
    pub trial: u64,
    pub predictable_ns: u64,
    pub unpredictable_ns: u64,
}

impl TimingSample {
    pub fn difference_ns(&self) -> i64 {
        self.unpredictable_ns as i64 - self.predictable_ns as i64
    }
}

/// Samples in trial execution order, one per trial.
pub type TimingSeries = Vec<TimingSample>;

fn clamp_ns(ns: u128) -> u64 {
    ns.min(u64::MAX as u128) as u64
}

/// Time a single invocation of `f` on the monotonic clock.
pub fn measure_ns<T>(mut f: impl FnMut() -> T) -> u64 {
    let start = Instant::now();
    black_box(f());
    clamp_ns(start.elapsed().as_nanos())
}

/// Smallest observable nonzero `Instant` delta, as a granularity estimate.
/// Reported alongside results so readers can judge how much of a
/// nanosecond-scale difference is clock quantization.
pub fn clock_resolution_ns() -> u64 {
    let mut best = u64::MAX;
    for _ in 0..RESOLUTION_PROBES {
        let start = Instant::now();
        let mut elapsed = start.elapsed();
        while elapsed.is_zero() {
            elapsed = start.elapsed();
        }
        best = best.min(clamp_ns(elapsed.as_nanos()));
    }
    best
}

/// Warm-up then the trial loop. The warm-up invokes each kernel once,
/// untimed, to prime caches and predictor state; its results are discarded.
/// Each trial then times the predictable kernel and the unpredictable kernel
/// independently and sequentially, so transient system noise hits both sides
/// of a trial similarly.
pub fn run_trials(config: &BenchConfig, bits: &mut BitSource) -> TimingSeries {
    let n = config.size;

    black_box(predictable_loop(n));
    black_box(unpredictable_loop(n, bits));

    let mut series = Vec::with_capacity(config.trials as usize);
    for trial in 1..=config.trials as u64 {
        let predictable_ns = measure_ns(|| predictable_loop(n));
        let unpredictable_ns = measure_ns(|| unpredictable_loop(n, bits));
        series.push(TimingSample {
            trial,
            predictable_ns,
            unpredictable_ns,
        });
    }
    series
}
