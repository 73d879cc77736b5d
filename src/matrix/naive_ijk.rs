use super::assert_square;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. Each `C[i][j]` is summed in a local
/// scalar over `k` and stored once. It's slow because the innermost loop
/// walks B down a column, touching a different row (and usually a
/// different cache line) on every iteration.
///
/// This is the reference order the other two are verified against.
///
/// `c` is overwritten, not accumulated into.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n)
/// * `b` - Matrix B (n × n)
/// * `c` - Output matrix C (n × n)
///
/// # Panics
///
/// Panics if `a` is not square, or if `b` or `c` doesn't have the same
/// shape as `a`.
pub fn matmul_naive_ijk(a: &[Vec<f64>], b: &[Vec<f64>], c: &mut [Vec<f64>]) {
    let n = a.len();
    assert_square(a, n, "A");
    assert_square(b, n, "B");
    assert_square(c, n, "C");

    for (a_row, c_row) in a.iter().zip(c.iter_mut()) {
        for (j, cij) in c_row.iter_mut().enumerate() {
            let mut s = 0.0;
            for (aik, b_row) in a_row.iter().zip(b) {
                s += aik * b_row[j];
            }
            *cij = s;
        }
    }
}
