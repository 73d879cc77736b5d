//! Naive matrix multiplication under three loop orders.
//!
//! The same triple loop, `C[i][j] = Σ A[i][k] * B[k][j]`, can be nested six
//! ways. This crate benchmarks three of them (`ijk`, `ikj`, `kij`) to show
//! how much of matmul performance is just memory access order, before any
//! blocking or SIMD gets involved.
//!
//! ## Usage
//!
//! ```
//! use matmul_loops::{multiply, random_matrix, LoopOrder};
//!
//! let a = random_matrix(64, 1, true);
//! let b = random_matrix(64, 2, true);
//!
//! let c = multiply(&a, &b, LoopOrder::Ikj);
//! assert_eq!(c.len(), 64);
//! ```
//!
//! Loop orders coming from outside (a command line, a config file) go
//! through [`multiply_by_name`], which rejects unknown tags:
//!
//! ```
//! use matmul_loops::{multiply_by_name, zeros_matrix};
//!
//! let a = zeros_matrix(2);
//! assert!(multiply_by_name(&a, &a, "kij").is_ok());
//! assert!(multiply_by_name(&a, &a, "jki").is_err());
//! ```
//!
//! ## What's inside
//!
//! - `ijk`, `ikj`, `kij` kernels over `Vec<Vec<f64>>`
//! - Seeded and entropy-seeded random matrices
//! - A timing harness with warmup, stats and verification against `ijk`

pub mod cli;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod order;

pub use error::{Error, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::naive_kij::matmul_naive_kij;
pub use matrix::random::random_matrix;
pub use matrix::{Matrix, equal_within, max_abs_diff, zeros_matrix};
pub use order::LoopOrder;

/// Matrix multiply: returns C = A * B.
///
/// Starts from a zero matrix and runs the kernel for `order`, which checks
/// the shapes. All orders compute the same product up to floating-point
/// rounding.
///
/// # Panics
///
/// Panics if A is not square or B doesn't have the same shape as A.
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>], order: LoopOrder) -> Matrix {
    let mut c = zeros_matrix(a.len());
    match order {
        LoopOrder::Ijk => matmul_naive_ijk(a, b, &mut c),
        LoopOrder::Ikj => matmul_naive_ikj(a, b, &mut c),
        LoopOrder::Kij => matmul_naive_kij(a, b, &mut c),
    }
    c
}

/// Same as [`multiply`] but takes the loop order as its tag (`"ijk"`,
/// `"ikj"` or `"kij"`).
///
/// # Errors
///
/// Returns [`Error::UnknownOrder`] for any other tag, whatever the size of
/// the inputs.
pub fn multiply_by_name(a: &[Vec<f64>], b: &[Vec<f64>], order: &str) -> Result<Matrix> {
    let order: LoopOrder = order.parse()?;
    Ok(multiply(a, b, order))
}
