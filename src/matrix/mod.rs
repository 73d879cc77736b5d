//! Square matrices and the naive loop-order kernels.
//!
//! A [`Matrix`] is a vector of rows, each row a vector of `n` values. The
//! kernels keep that nested layout on purpose: the three loop orders only
//! differ in which rows they keep hot, and a flat buffer would blur that.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod naive_kij;
pub mod random;

/// Row-major `n × n` matrix of `f64`.
pub type Matrix = Vec<Vec<f64>>;

/// `n × n` matrix with every entry `0.0`.
///
/// This is the accumulator the `ikj` and `kij` kernels add into.
///
/// ```
/// use matmul_loops::zeros_matrix;
///
/// let z = zeros_matrix(2);
/// assert_eq!(z, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
/// assert!(zeros_matrix(0).is_empty());
/// ```
pub fn zeros_matrix(n: usize) -> Matrix {
    vec![vec![0.0; n]; n]
}

/// True when `a` and `b` have the same shape and every pair of entries is
/// within `eps` of each other.
///
/// NaN never compares within tolerance, so a NaN on either side fails.
pub fn equal_within(a: &[Vec<f64>], b: &[Vec<f64>], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(ra, rb)| {
        ra.len() == rb.len() && ra.iter().zip(rb).all(|(x, y)| (x - y).abs() <= eps)
    })
}

/// Largest absolute entry-wise difference between `a` and `b`.
///
/// Returns `0.0` for empty matrices and NaN if any difference is NaN.
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn max_abs_diff(a: &[Vec<f64>], b: &[Vec<f64>]) -> f64 {
    assert_eq!(a.len(), b.len(), "row count mismatch: {} vs {}", a.len(), b.len());
    let mut worst = 0.0f64;
    for (i, (ra, rb)) in a.iter().zip(b).enumerate() {
        assert_eq!(ra.len(), rb.len(), "row {}: length mismatch", i);
        for (x, y) in ra.iter().zip(rb) {
            let d = (x - y).abs();
            if d.is_nan() {
                return f64::NAN;
            }
            worst = worst.max(d);
        }
    }
    worst
}

/// Panics unless `m` has `n` rows of `n` values.
pub(crate) fn assert_square(m: &[Vec<f64>], n: usize, name: &str) {
    assert_eq!(m.len(), n, "{}: expected {} rows, got {}", name, n, m.len());
    for (i, row) in m.iter().enumerate() {
        assert_eq!(
            row.len(),
            n,
            "{}: row {} has {} values, expected {}",
            name,
            i,
            row.len(),
            n
        );
    }
}
