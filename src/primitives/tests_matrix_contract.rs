// =========================================================================
// FALSIFY-MZ: Matrix arithmetic contract (matriz primitives)
//
// Each test attempts to falsify one published behavior of the four
// operations (add, subtract, multiply, divide) and the Gauss-Jordan
// inversion underneath divide.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations", ch. 3 (Gaussian
//     elimination and pivoting)
// =========================================================================

use super::*;

/// FALSIFY-MZ-001: Addition commutes: A + B = B + A
#[test]
fn falsify_mz_001_add_commutes() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.5, 0.0, 5.0, -6.25]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![9.0, 8.0, -7.0, 6.5, -5.0, 4.0]).expect("valid");

    let ab = a.add(&b).expect("same shape");
    let ba = b.add(&a).expect("same shape");
    assert_eq!(
        ab.as_slice(),
        ba.as_slice(),
        "FALSIFIED MZ-001: A+B != B+A"
    );
}

/// FALSIFY-MZ-002: Subtraction undoes addition: (A + B) - B = A exactly
/// (integer-valued entries, so no rounding occurs)
#[test]
fn falsify_mz_002_add_sub_round_trip() {
    let a = Matrix::from_vec(3, 2, vec![1.0, -2.0, 3.0, 40.0, -55.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, -9.0, 10.0, 11.0, -12.0]).expect("valid");

    let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");
    assert_eq!(
        back.as_slice(),
        a.as_slice(),
        "FALSIFIED MZ-002: (A+B)-B != A"
    );
}

/// FALSIFY-MZ-003: Multiply by identity is a no-op: A * I = A
#[test]
fn falsify_mz_003_matmul_identity() {
    let a = Matrix::from_vec(2, 4, vec![1.5, 2.0, -3.0, 0.25, 5.0, -6.0, 7.0, 8.5]).expect("valid");
    let prod = a.matmul(&Matrix::eye(4)).expect("compatible dims");

    assert_eq!(prod.shape(), a.shape(), "FALSIFIED MZ-003: shape changed");
    assert_eq!(
        prod.as_slice(),
        a.as_slice(),
        "FALSIFIED MZ-003: A*I != A"
    );
}

/// FALSIFY-MZ-004: Known inverse: [[4,7],[2,6]]^-1 = [[0.6,-0.7],[-0.2,0.4]]
/// and M * M^-1 = I, both within 1e-9
#[test]
fn falsify_mz_004_known_inverse() {
    let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
    let inv = m.inverse().expect("invertible");

    let expected = [0.6, -0.7, -0.2, 0.4];
    for (i, (a, e)) in inv.as_slice().iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < 1e-9,
            "FALSIFIED MZ-004: inv[{i}]={a}, expected {e}"
        );
    }

    let prod = m.matmul(&inv).expect("compatible dims");
    let identity = Matrix::eye(2);
    for (i, (p, e)) in prod
        .as_slice()
        .iter()
        .zip(identity.as_slice().iter())
        .enumerate()
    {
        assert!(
            (p - e).abs() < 1e-9,
            "FALSIFIED MZ-004: (M*M^-1)[{i}]={p}, expected {e}"
        );
    }
}

/// FALSIFY-MZ-005: Singular input is detected: [[1,2],[2,4]] has no inverse
#[test]
fn falsify_mz_005_singular_detected() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("valid");
    assert!(
        matches!(m.inverse(), Err(MatrizError::SingularMatrix { order: 2 })),
        "FALSIFIED MZ-005: singular matrix inverted"
    );
}

/// FALSIFY-MZ-006: Divide by singular B fails cleanly, no panic
#[test]
fn falsify_mz_006_div_by_singular() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![3.0, 6.0, 1.0, 2.0]).expect("valid");
    assert!(
        matches!(a.div(&b), Err(MatrizError::SingularMatrix { .. })),
        "FALSIFIED MZ-006: division by singular B succeeded"
    );
}

/// FALSIFY-MZ-007: Divide by identity is a no-op: A / I = A
#[test]
fn falsify_mz_007_div_identity() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let q = a.div(&Matrix::eye(3)).expect("identity is invertible");
    for (i, (x, y)) in q.as_slice().iter().zip(a.as_slice().iter()).enumerate() {
        assert!(
            (x - y).abs() < 1e-12,
            "FALSIFIED MZ-007: (A/I)[{i}]={x}, expected {y}"
        );
    }
}

/// FALSIFY-MZ-008: Partial pivoting rescues a near-zero leading entry:
/// [[1e-15,1],[1,1]] inverts by selecting row 1 as the first pivot
#[test]
fn falsify_mz_008_pivot_row_selection() {
    let m = Matrix::from_vec(2, 2, vec![1e-15, 1.0, 1.0, 1.0]).expect("valid");
    let inv = m.inverse().expect("FALSIFIED MZ-008: pivoting failed to rescue");

    let prod = m.matmul(&inv).expect("compatible dims");
    let identity = Matrix::eye(2);
    for (i, (p, e)) in prod
        .as_slice()
        .iter()
        .zip(identity.as_slice().iter())
        .enumerate()
    {
        assert!(
            (p - e).abs() < 1e-9,
            "FALSIFIED MZ-008: (M*M^-1)[{i}]={p}, expected {e}"
        );
    }
}
