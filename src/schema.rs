use serde::Serialize;

use crate::aggregate::AggregateResult;
use crate::harness::TimingSample;

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub size: i64,
    pub trials: i64,

    /// Seed actually in effect, when the run was deterministic.
    pub seed: Option<u64>,

    /// Smallest observable monotonic-clock delta on this host, in ns.
    pub clock_resolution_ns: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub run: RunMeta,
    pub samples: Vec<TimingSample>,
    pub aggregate: AggregateResult,
}
