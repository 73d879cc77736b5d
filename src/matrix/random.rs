//! Random matrix generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Matrix;

/// `n × n` matrix of values drawn uniformly from `[0.0, 1.0)`.
///
/// With `seeded` set, the generator is initialized from `seed` and the same
/// `(n, seed)` always gives a bit-identical matrix. Otherwise it is seeded
/// from OS entropy and `seed` is ignored.
///
/// ```
/// use matmul_loops::random_matrix;
///
/// let a = random_matrix(4, 42, true);
/// let b = random_matrix(4, 42, true);
/// assert_eq!(a, b);
/// assert!(a.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn random_matrix(n: usize, seed: u64, seeded: bool) -> Matrix {
    let mut rng = seedable_rng(seeded.then_some(seed));
    random_matrix_with(&mut rng, n)
}

/// Same as [`random_matrix`] but draws from a caller-supplied generator.
pub fn random_matrix_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Matrix {
    (0..n)
        .map(|_| (0..n).map(|_| rng.random::<f64>()).collect())
        .collect()
}

fn seedable_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    }
}
