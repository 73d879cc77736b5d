use super::assert_square;

/// Matrix multiplication using k-i-j loop order.
///
/// Same inner loop as i-k-j, with the outer two loops swapped. Row `k` of
/// B is reused for every row of C before moving on, while A is read down
/// column `k`. Each pass over `k` adds one rank-1 update into all of C.
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
pub fn matmul_naive_kij(a: &[Vec<f64>], b: &[Vec<f64>], c: &mut [Vec<f64>]) {
    let n = a.len();
    assert_square(a, n, "A");
    assert_square(b, n, "B");
    assert_square(c, n, "C");

    for (k, b_row) in b.iter().enumerate() {
        for (a_row, c_row) in a.iter().zip(c.iter_mut()) {
            let aik = a_row[k];
            for (cij, bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}
