use matmul_loops::{
    Error, LoopOrder, matmul_naive_ijk, matmul_naive_ikj, matmul_naive_kij, multiply,
    multiply_by_name, random_matrix, zeros_matrix,
};

fn assert_matrices_equal(expected: &[Vec<f64>], actual: &[Vec<f64>], eps: f64, name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: row count mismatch", name);
    for (i, (er, ar)) in expected.iter().zip(actual).enumerate() {
        assert_eq!(er.len(), ar.len(), "{}: row {} length mismatch", name, i);
        for (j, (e, a)) in er.iter().zip(ar).enumerate() {
            assert!(
                (e - a).abs() <= eps,
                "{}: mismatch at ({}, {}): expected {}, got {}",
                name,
                i,
                j,
                e,
                a
            );
        }
    }
}

/// C[i][j] = Σ A[i][k] * B[k][j], written out with plain indices.
fn reference_multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = a.len();
    let mut c = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let mut s = 0.0;
            for k in 0..n {
                s += a[i][k] * b[k][j];
            }
            c[i][j] = s;
        }
    }
    c
}

fn patterned(n: usize, offset: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| ((i * n + j + offset) % 10) as f64).collect())
        .collect()
}

// ============================================================
// Known products
// ============================================================

#[test]
fn test_3x3_known_product() {
    let a = vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ];
    let b = vec![
        vec![9.0, 8.0, 7.0],
        vec![6.0, 5.0, 4.0],
        vec![3.0, 2.0, 1.0],
    ];
    let expected = vec![
        vec![30.0, 24.0, 18.0],
        vec![84.0, 69.0, 54.0],
        vec![138.0, 114.0, 90.0],
    ];

    for order in LoopOrder::ALL {
        assert_eq!(multiply(&a, &b, order), expected, "order {}", order);
    }
}

#[test]
fn test_2x2_multiply() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];

    for order in LoopOrder::ALL {
        assert_eq!(
            multiply(&a, &b, order),
            vec![vec![19.0, 22.0], vec![43.0, 50.0]]
        );
    }
}

#[test]
fn test_1x1_multiply() {
    for order in LoopOrder::ALL {
        assert_eq!(multiply(&[vec![3.0]], &[vec![-2.5]], order), vec![vec![-7.5]]);
    }
}

#[test]
fn test_empty_matrices() {
    let empty = zeros_matrix(0);
    for order in LoopOrder::ALL {
        assert!(multiply(&empty, &empty, order).is_empty());
    }
    assert!(random_matrix(0, 5, true).is_empty());
    assert!(random_matrix(0, 0, false).is_empty());
}

// ============================================================
// Against the reference definition
// ============================================================

#[test]
fn test_integer_matrices_match_reference() {
    for n in [2, 3, 4, 5, 7, 8, 9, 16, 17, 31] {
        let a = patterned(n, 0);
        let b = patterned(n, 3);
        let expected = reference_multiply(&a, &b);

        for order in LoopOrder::ALL {
            assert_matrices_equal(
                &expected,
                &multiply(&a, &b, order),
                1e-9,
                &format!("{}_size_{}", order, n),
            );
        }
    }
}

#[test]
fn test_random_matrices_match_reference() {
    for (n, seed) in [(8, 0), (33, 1), (64, 2), (100, 3)] {
        let a = random_matrix(n, seed, true);
        let b = random_matrix(n, seed + 1, true);
        let expected = reference_multiply(&a, &b);

        for order in LoopOrder::ALL {
            assert_matrices_equal(
                &expected,
                &multiply(&a, &b, order),
                1e-6,
                &format!("{}_random_{}", order, n),
            );
        }
    }
}

#[test]
fn test_orders_agree_pairwise() {
    let a = random_matrix(48, 11, true);
    let b = random_matrix(48, 12, true);
    let results: Vec<_> = LoopOrder::ALL
        .iter()
        .map(|&order| (order, multiply(&a, &b, order)))
        .collect();

    for (x, cx) in &results {
        for (y, cy) in &results {
            assert_matrices_equal(cx, cy, 1e-9, &format!("{} vs {}", x, y));
        }
    }
}

#[test]
fn test_identity() {
    let n = 4;
    let identity: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    let r = random_matrix(n, 42, true);

    for order in LoopOrder::ALL {
        assert_matrices_equal(&r, &multiply(&identity, &r, order), 1e-9, "I * R");
        assert_matrices_equal(&r, &multiply(&r, &identity, order), 1e-9, "R * I");
    }
}

#[test]
fn test_inputs_untouched() {
    let a = random_matrix(10, 1, true);
    let b = random_matrix(10, 2, true);
    let (a0, b0) = (a.clone(), b.clone());

    for order in LoopOrder::ALL {
        multiply(&a, &b, order);
    }
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// ============================================================
// Direct kernel tests (bypassing dispatch)
// ============================================================

#[test]
fn test_ijk_overwrites_output() {
    let a = patterned(5, 1);
    let b = patterned(5, 2);
    let mut c = vec![vec![123.0; 5]; 5];

    matmul_naive_ijk(&a, &b, &mut c);

    assert_matrices_equal(&reference_multiply(&a, &b), &c, 1e-9, "ijk_overwrite");
}

#[test]
fn test_ikj_and_kij_accumulate() {
    let a = patterned(6, 4);
    let b = patterned(6, 5);
    let product = reference_multiply(&a, &b);

    let mut c_ikj = vec![vec![1.0; 6]; 6];
    let mut c_kij = vec![vec![1.0; 6]; 6];
    matmul_naive_ikj(&a, &b, &mut c_ikj);
    matmul_naive_kij(&a, &b, &mut c_kij);

    let expected: Vec<Vec<f64>> = product
        .iter()
        .map(|row| row.iter().map(|x| x + 1.0).collect())
        .collect();
    assert_matrices_equal(&expected, &c_ikj, 1e-9, "ikj_accumulate");
    assert_matrices_equal(&expected, &c_kij, 1e-9, "kij_accumulate");
}

// ============================================================
// Loop-order tags
// ============================================================

#[test]
fn test_multiply_by_name() {
    let a = patterned(3, 0);
    let b = patterned(3, 1);
    for tag in ["ijk", "ikj", "kij"] {
        let c = multiply_by_name(&a, &b, tag).unwrap();
        assert_eq!(c, reference_multiply(&a, &b), "tag {}", tag);
    }
}

#[test]
fn test_unknown_order_fails_for_every_size() {
    for n in [0, 1, 3, 17] {
        let a = random_matrix(n, 9, true);
        for tag in ["jki", "kji", "jik", "IKJ", "", "ikj "] {
            assert_eq!(
                multiply_by_name(&a, &a, tag),
                Err(Error::UnknownOrder(tag.to_string())),
                "n={} tag={:?}",
                n,
                tag
            );
        }
    }
}

#[test]
fn test_unknown_order_message_names_the_tag() {
    let err = multiply_by_name(&[], &[], "zzz").unwrap_err();
    assert_eq!(err.to_string(), "unknown loop order: zzz");
}

#[test]
fn test_order_tags_round_trip() {
    for order in LoopOrder::ALL {
        assert_eq!(order.to_string().parse::<LoopOrder>(), Ok(order));
    }
    assert_eq!(LoopOrder::default(), LoopOrder::Ikj);
    assert_eq!(LoopOrder::REFERENCE, LoopOrder::Ijk);
}

// ============================================================
// Preconditions
// ============================================================

#[test]
#[should_panic(expected = "B: expected 3 rows")]
fn test_mismatched_sizes_panic() {
    multiply(&zeros_matrix(3), &zeros_matrix(2), LoopOrder::Ikj);
}

#[test]
#[should_panic(expected = "A: row 1 has 2 values")]
fn test_ragged_matrix_panics() {
    let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]];
    multiply(&a, &zeros_matrix(3), LoopOrder::Ijk);
}

#[test]
#[should_panic(expected = "B: expected 2 rows, got 1")]
fn test_ijk_kernel_short_b_panics() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![1.0, 1.0]];
    let mut c = zeros_matrix(2);
    matmul_naive_ijk(&a, &b, &mut c);
}

#[test]
#[should_panic(expected = "B: expected 2 rows, got 1")]
fn test_ikj_kernel_short_b_panics() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![1.0, 1.0]];
    let mut c = zeros_matrix(2);
    matmul_naive_ikj(&a, &b, &mut c);
}

#[test]
#[should_panic(expected = "B: expected 2 rows, got 1")]
fn test_kij_kernel_short_b_panics() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![1.0, 1.0]];
    let mut c = zeros_matrix(2);
    matmul_naive_kij(&a, &b, &mut c);
}

#[test]
#[should_panic(expected = "C: row 1 has 1 values")]
fn test_kernel_short_c_row_panics() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let mut c = vec![vec![0.0, 0.0], vec![0.0]];
    matmul_naive_ikj(&a, &a, &mut c);
}
