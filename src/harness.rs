//! Timing harness for the loop-order kernels.
//!
//! For each order: one small warmup multiply, then `runs` timed multiplies
//! on fresh random inputs, then summary stats. The first run can be checked
//! against the `ijk` reference when the matrices are small enough.

use std::hint::black_box;
use std::time::Instant;

use log::{debug, warn};

use crate::matrix::{Matrix, max_abs_diff};
use crate::{LoopOrder, multiply, random_matrix};

/// Tolerance used when checking an order against the reference.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Largest `n` that gets verified. The reference is another O(n³) multiply.
pub const VERIFY_LIMIT: usize = 128;

/// Size of the warmup multiply (or `n`, if smaller).
pub const WARMUP_SIZE: usize = 16;

/// Everything one benchmark invocation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Matrix size (n × n).
    pub n: usize,
    /// Timed runs per order.
    pub runs: usize,
    /// Orders to benchmark, in the order given.
    pub orders: Vec<LoopOrder>,
    /// Base seed. `None` draws inputs from OS entropy.
    pub seed: Option<u64>,
    /// Check the first run of each order against `ijk`.
    pub verify: bool,
    /// Largest allowed entry-wise difference from the reference.
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: 256,
            runs: 3,
            orders: vec![LoopOrder::default()],
            seed: None,
            verify: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BenchConfig {
    /// Seeds for A and B on run `run`: `seed + run` and `seed + run + 1`.
    ///
    /// Consecutive runs share a seed between B and the next A; that's
    /// fine, they are different matrices in different roles.
    pub fn run_seeds(&self, run: usize) -> Option<(u64, u64)> {
        self.seed.map(|s| {
            let a = s.wrapping_add(run as u64);
            (a, a.wrapping_add(1))
        })
    }
}

/// Outcome of checking a result against the reference order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verification {
    Passed { max_diff: f64 },
    Mismatch { max_diff: f64 },
    /// `n` was above [`VERIFY_LIMIT`].
    Skipped { n: usize },
}

impl Verification {
    /// False only for a mismatch; a skipped check is not a failure.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Verification::Mismatch { .. })
    }
}

/// Summary statistics over run times, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `0.0` for fewer than two runs.
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Stats over `times`. All fields are `0.0` when `times` is empty.
    pub fn from_times(times: &[f64]) -> Self {
        if times.is_empty() {
            return Self {
                mean: 0.0,
                median: 0.0,
                stdev: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        let len = times.len();
        let mean = times.iter().sum::<f64>() / len as f64;

        let mut sorted = times.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if len % 2 == 1 {
            sorted[len / 2]
        } else {
            (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
        };

        let stdev = if len > 1 {
            let var = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (len - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        Self {
            mean,
            median,
            stdev,
            min: sorted[0],
            max: sorted[len - 1],
        }
    }
}

/// Timings (and optional verification) for one loop order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    pub order: LoopOrder,
    pub n: usize,
    /// Seconds per run, in run order.
    pub times: Vec<f64>,
    pub stats: Stats,
    pub verification: Option<Verification>,
}

impl OrderReport {
    /// Throughput at the mean run time.
    pub fn gflops(&self) -> f64 {
        gflops(self.n, self.stats.mean)
    }
}

/// `2n³` floating point operations over `secs`, in GFLOPS.
pub fn gflops(n: usize, secs: f64) -> f64 {
    if secs > 0.0 {
        2.0 * (n as f64).powi(3) / secs / 1e9
    } else {
        0.0
    }
}

/// Benchmark every order in `config`, calling `on_run(order, run, secs)`
/// after each timed run.
pub fn run<F>(config: &BenchConfig, mut on_run: F) -> Vec<OrderReport>
where
    F: FnMut(LoopOrder, usize, f64),
{
    config
        .orders
        .iter()
        .map(|&order| {
            warmup(config, order);
            run_order(config, order, |r, secs| on_run(order, r, secs))
        })
        .collect()
}

/// One untimed multiply at `min(n, WARMUP_SIZE)` to fault in code and
/// allocator state before timing.
pub fn warmup(config: &BenchConfig, order: LoopOrder) {
    let n = config.n.min(WARMUP_SIZE);
    debug!("warmup: order={} n={}", order, n);
    let (a, b) = inputs(n, config.run_seeds(0));
    black_box(multiply(&a, &b, order));
}

/// Timed runs for a single order.
pub fn run_order<F>(config: &BenchConfig, order: LoopOrder, mut on_run: F) -> OrderReport
where
    F: FnMut(usize, f64),
{
    let mut times = Vec::with_capacity(config.runs);
    let mut verification = None;

    for r in 0..config.runs {
        let seeds = config.run_seeds(r);
        debug!("run {}: order={} n={} seeds={:?}", r + 1, order, config.n, seeds);
        let (a, b) = inputs(config.n, seeds);

        let start = Instant::now();
        let c = multiply(&a, &b, order);
        let secs = start.elapsed().as_secs_f64();
        let c = black_box(c);

        times.push(secs);
        on_run(r, secs);

        if config.verify && r == 0 {
            verification = Some(verify(&a, &b, &c, config.tolerance));
        }
    }

    OrderReport {
        order,
        n: config.n,
        stats: Stats::from_times(&times),
        times,
        verification,
    }
}

/// Check `c` (the product of `a` and `b` under some order) against the
/// reference order.
pub fn verify(a: &[Vec<f64>], b: &[Vec<f64>], c: &[Vec<f64>], tolerance: f64) -> Verification {
    let n = a.len();
    if n > VERIFY_LIMIT {
        warn!("n={} too large for cheap verification; skipping", n);
        return Verification::Skipped { n };
    }

    let reference = multiply(a, b, LoopOrder::REFERENCE);
    let max_diff = max_abs_diff(c, &reference);
    if max_diff <= tolerance {
        Verification::Passed { max_diff }
    } else {
        warn!(
            "verification mismatch: max diff {:e} exceeds tolerance {:e}",
            max_diff, tolerance
        );
        Verification::Mismatch { max_diff }
    }
}

fn inputs(n: usize, seeds: Option<(u64, u64)>) -> (Matrix, Matrix) {
    match seeds {
        Some((sa, sb)) => (random_matrix(n, sa, true), random_matrix(n, sb, true)),
        None => (random_matrix(n, 0, false), random_matrix(n, 0, false)),
    }
}
