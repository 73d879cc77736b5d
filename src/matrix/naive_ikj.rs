use super::assert_square;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, `A[i][k]` becomes a scalar that is
/// broadcast across row `k` of B and added into row `i` of C. The
/// innermost loop reads B and writes C sequentially (stride 1), so this
/// is usually the fastest of the three orders.
///
/// `C[i][j]` is built up across the middle loop rather than finished in
/// one pass, so `c` must start out zeroed.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n)
/// * `b` - Matrix B (n × n)
/// * `c` - Matrix C (n × n), accumulated into (C += A * B)
///
/// # Panics
///
/// Panics if `a` is not square, or if `b` or `c` doesn't have the same
/// shape as `a`.
pub fn matmul_naive_ikj(a: &[Vec<f64>], b: &[Vec<f64>], c: &mut [Vec<f64>]) {
    let n = a.len();
    assert_square(a, n, "A");
    assert_square(b, n, "B");
    assert_square(c, n, "C");

    for (a_row, c_row) in a.iter().zip(c.iter_mut()) {
        for (&aik, b_row) in a_row.iter().zip(b) {
            for (cij, bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}
