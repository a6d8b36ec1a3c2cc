// =========================================================================
// FALSIFY-MX: Matrix primitives contract (matriz primitives)
//
// Each test states an algebraic law the Matrix type must satisfy and tries
// to falsify it on fixed data; the proptest module below retries the same
// laws on generated data.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-001: (A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::eye(3);
    let result = a.matmul(&eye).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (result.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-004: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                result.get(i, j),
                a.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-005: Scalar inverse: (A * a) / a = A for a != 0
#[test]
fn falsify_mx_005_scale_divide_inverse() {
    let a = Matrix::from_vec(2, 2, vec![1.5, -2.25, 0.0, 4.0]).expect("valid");
    let round_trip = a.mul_scalar(3.0).div_scalar(3.0);

    for i in 0..2 {
        for j in 0..2 {
            assert!(
                (round_trip.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-005: ((A*3)/3)[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-006: Additive round-trip: (A + B) - B = A
#[test]
fn falsify_mx_006_add_sub_round_trip() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![-5.0, 0.5, 7.0, -0.25]).expect("valid");
    let round_trip = a
        .add(&b)
        .expect("same shape")
        .sub(&b)
        .expect("same shape");

    for i in 0..2 {
        for j in 0..2 {
            assert!(
                (round_trip.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-006: ((A+B)-B)[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-007: Sum matches an independent double-loop reduction
#[test]
fn falsify_mx_007_sum_matches_reference() {
    let a = Matrix::from_vec(3, 4, (1..=12).map(f64::from).collect()).expect("valid");

    let mut reference = 0.0;
    for i in 0..3 {
        for j in 0..4 {
            reference += a.get(i, j);
        }
    }

    assert!(
        (a.sum() - reference).abs() < 1e-12,
        "FALSIFIED MX-007: sum={}, reference={reference}",
        a.sum()
    );
}

/// FALSIFY-MX-008: det(I_n) = 1
#[test]
fn falsify_mx_008_det_identity() {
    for n in 1..=4 {
        let det = Matrix::eye(n).det().expect("square");
        assert!(
            (det - 1.0).abs() < 1e-12,
            "FALSIFIED MX-008: det(I_{n})={det}, expected 1"
        );
    }
}

/// FALSIFY-MX-009: Triangular det = product of the diagonal
#[test]
fn falsify_mx_009_det_triangular() {
    let a = Matrix::from_vec(
        4,
        4,
        vec![
            1.0, 5.0, -3.0, 2.0, //
            0.0, 2.0, 8.0, -1.0, //
            0.0, 0.0, 3.0, 0.5, //
            0.0, 0.0, 0.0, 4.0,
        ],
    )
    .expect("valid");
    let det = a.det().expect("square");

    assert!(
        (det - 24.0).abs() < 1e-9,
        "FALSIFIED MX-009: det={det}, expected 1*2*3*4=24"
    );
}

/// FALSIFY-MX-010: Hadamard with ones is the identity transform
#[test]
fn falsify_mx_010_hadamard_ones_identity() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.5, 0.0, 5.0, -6.25]).expect("valid");
    let result = a.hadamard(&Matrix::ones(2, 3)).expect("same shape");

    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (result.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-010: (A∘1)[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

mod mx_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution on generated data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            data in proptest::collection::vec(-100.0f64..100.0, 12),
        ) {
            let a = Matrix::from_vec(3, 4, data).expect("valid");
            let att = a.transpose().transpose();
            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-006-prop: Additive round-trip on generated data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_006_prop_add_sub_round_trip(
            a_data in proptest::collection::vec(-100.0f64..100.0, 9),
            b_data in proptest::collection::vec(-100.0f64..100.0, 9),
        ) {
            let a = Matrix::from_vec(3, 3, a_data).expect("valid");
            let b = Matrix::from_vec(3, 3, b_data).expect("valid");
            let round_trip = a.add(&b).expect("same shape").sub(&b).expect("same shape");

            for i in 0..3 {
                for j in 0..3 {
                    prop_assert!(
                        (round_trip.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "FALSIFIED MX-006-prop: ((A+B)-B)[{},{}]={}, A[{},{}]={}",
                        i, j, round_trip.get(i, j), i, j, a.get(i, j)
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-011-prop: det of a generated diagonal matrix is the
    /// product of its diagonal (n <= 4 keeps the factorial expansion cheap)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_011_prop_det_diagonal(
            diag in proptest::collection::vec(-10.0f64..10.0, 1..=4),
        ) {
            let n = diag.len();
            let mut m = Matrix::zeros(n, n);
            for (i, &v) in diag.iter().enumerate() {
                m.set(i, i, v);
            }

            let det = m.det().expect("square");
            let product: f64 = diag.iter().product();
            prop_assert!(
                (det - product).abs() < 1e-9,
                "FALSIFIED MX-011-prop: det={}, diagonal product={}",
                det, product
            );
        }
    }
}
