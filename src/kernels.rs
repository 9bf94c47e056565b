//! The two loop kernels under measurement.
//!
//! Both kernels sum a linear scan of `0..n` under a conditional guard. The
//! predictable variant's guard alternates every iteration; the unpredictable
//! variant's guard is a fresh uniform draw per iteration. Everything else is
//! identical, so the timing difference isolates branch-prediction behavior.

use std::hint::black_box;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::random::BitSource;

/// Process-wide result sink. The store keeps the loop bodies observable so
/// the optimizer cannot eliminate them; without it the benchmark measures
/// nothing.
static RESULT: AtomicI64 = AtomicI64::new(0);

#[inline]
fn sink(sum: i64) {
    RESULT.store(black_box(sum), Ordering::Relaxed);
}

/// Last sum written by either kernel.
pub fn sink_value() -> i64 {
    RESULT.load(Ordering::Relaxed)
}

/// Sum of the even indices in `0..n`. The guard alternates strictly, so the
/// branch predictor tracks it perfectly.
pub fn predictable_loop(n: i64) -> i64 {
    let mut sum: i64 = 0;
    for i in 0..n {
        if i % 2 == 0 {
            sum += i;
        }
    }
    sink(sum);
    sum
}

/// Same scan, but the guard is an independent uniform draw per iteration.
pub fn unpredictable_loop(n: i64, bits: &mut BitSource) -> i64 {
    let mut sum: i64 = 0;
    for i in 0..n {
        if bits.next_bit() {
            sum += i;
        }
    }
    sink(sum);
    sum
}
