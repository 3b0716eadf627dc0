pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::<f64>::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 1) - 1.0).abs() < 1e-12);
    assert!((m.get(2, 2) - 1.0).abs() < 1e-12);
    assert!((m.get(0, 1) - 0.0).abs() < 1e-12);
}

#[test]
fn test_get_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(1, 0, 5.5);
    assert!((m.get(1, 0) - 5.5).abs() < 1e-12);
}

#[test]
fn test_into_vec_round_trip() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let m = Matrix::from_vec(2, 2, data.clone()).expect("valid");
    assert_eq!(m.into_vec(), data);
}

#[test]
fn test_add() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![10.0, 20.0, 30.0, 40.0]).expect("valid");
    let c = a.add(&b).expect("same shape");
    assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
}

#[test]
fn test_add_shape_mismatch() {
    let a = Matrix::zeros(2, 2);
    let b = Matrix::zeros(2, 3);
    assert!(matches!(
        a.add(&b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_sub() {
    let a = Matrix::from_vec(2, 2, vec![10.0, 20.0, 30.0, 40.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let c = a.sub(&b).expect("same shape");
    assert_eq!(c.as_slice(), &[9.0, 18.0, 27.0, 36.0]);
}

#[test]
fn test_sub_shape_mismatch() {
    let a = Matrix::zeros(3, 2);
    let b = Matrix::zeros(2, 2);
    assert!(matches!(
        a.sub(&b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_matmul_inner_mismatch() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 2);
    assert!(matches!(
        a.matmul(&b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_inverse_known_2x2() {
    let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
    let inv = m.inverse().expect("invertible");
    let expected = [0.6, -0.7, -0.2, 0.4];
    for (a, e) in inv.as_slice().iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-9);
    }
}

#[test]
fn test_inverse_not_square() {
    let m = Matrix::zeros(2, 3);
    assert!(matches!(
        m.inverse(),
        Err(MatrizError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn test_inverse_singular() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("valid");
    assert!(matches!(
        m.inverse(),
        Err(MatrizError::SingularMatrix { order: 2 })
    ));
}

#[test]
fn test_div_by_identity() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let q = a.div(&Matrix::eye(3)).expect("identity is invertible");
    for (x, y) in q.as_slice().iter().zip(a.as_slice().iter()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn test_div_by_singular() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("valid");
    assert!(matches!(
        a.div(&b),
        Err(MatrizError::SingularMatrix { order: 2 })
    ));
}

#[test]
fn test_div_not_square_divisor() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(a.div(&b), Err(MatrizError::NotSquare { .. })));
}

#[test]
fn test_from_text() {
    let m = Matrix::from_text(2, 2, "1 2.5\n-3 4e1").expect("four valid tokens");
    assert_eq!(m.as_slice(), &[1.0, 2.5, -3.0, 40.0]);
}

#[test]
fn test_from_text_bad_token() {
    let result = Matrix::from_text(1, 2, "1 abc");
    assert!(matches!(result, Err(MatrizError::Other(_))));
}

#[test]
fn test_from_text_wrong_count() {
    let result = Matrix::from_text(2, 2, "1 2 3");
    assert!(matches!(
        result,
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_to_text() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.5, -0.125, 4.0]).expect("valid");
    assert_eq!(m.to_text(), "1.000 2.500\n-0.125 4.000");
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let json = serde_json::to_string(&m).expect("serializable");
    let back: Matrix<f64> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, m);
}
