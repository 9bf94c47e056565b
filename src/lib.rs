//! Branch-misprediction cost micro-benchmark.
//!
//! Times two structurally identical loops that differ only in branch
//! predictability: one guard alternates every iteration, the other follows a
//! uniform random draw. Per-trial nanosecond timings and their averages are
//! written as CSV and summarized on the console.

pub mod aggregate;
pub mod harness;
pub mod kernels;
pub mod random;
pub mod report;
pub mod schema;
