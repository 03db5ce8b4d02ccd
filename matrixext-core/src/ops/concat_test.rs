use super::*;
use crate::utils::testing::create_test_matrix;
use crate::vector::Vector;

fn m23a() -> Matrix<i64> {
    create_test_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]])
}

fn m23b() -> Matrix<i64> {
    create_test_matrix(vec![vec![2, 3, 4], vec![5, 6, 7]])
}

fn m22() -> Matrix<i64> {
    create_test_matrix(vec![vec![1, 2], vec![3, 4]])
}

fn m12() -> Matrix<i64> {
    create_test_matrix(vec![vec![1, 2]])
}

fn m21() -> Matrix<i64> {
    create_test_matrix(vec![vec![1], vec![2]])
}

#[test]
fn test_hconcat_matrices() {
    let (a, b, c) = (m23a(), m22(), m23b());
    let result = hconcat_op([Operand::from(&a), Operand::from(&b), Operand::from(&c)]).unwrap();
    assert_eq!(
        result,
        create_test_matrix(vec![vec![1, 2, 3, 1, 2, 2, 3, 4], vec![4, 5, 6, 3, 4, 5, 6, 7]])
    );
    assert_eq!(result.column_count(), a.column_count() + b.column_count() + c.column_count());
}

#[test]
fn test_hconcat_row_mismatch() {
    let (a, b) = (m23a(), m12());
    let result = hconcat_op([Operand::from(&a), Operand::from(&b)]);
    assert!(matches!(result, Err(MatrixError::DimensionMismatch { .. })));
}

#[test]
fn test_hconcat_type_check_precedes_dimension_check() {
    let (a, b) = (m23a(), m12());
    let result = hconcat_op([Operand::from(&a), Operand::from(&b), Operand::from(5i64)]);
    assert!(matches!(result, Err(MatrixError::TypeMismatch { .. })));
}

#[test]
fn test_hconcat_with_vector() {
    let v = Vector::new(vec![1i64, 2]);
    let (a, b) = (m22(), m21());
    assert_eq!(
        hconcat_op([Operand::from(&a), Operand::from(&v)]).unwrap(),
        create_test_matrix(vec![vec![1, 2, 1], vec![3, 4, 2]])
    );
    assert_eq!(
        hconcat_op([Operand::from(&b), Operand::from(&v)]).unwrap(),
        create_test_matrix(vec![vec![1, 1], vec![2, 2]])
    );

    let wide = m12();
    assert!(matches!(
        hconcat_op([Operand::from(&wide), Operand::from(&v)]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_vconcat_matrices() {
    let (a, b) = (m23a(), m23b());
    let result = vconcat_op([Operand::from(&a), Operand::from(&b)]).unwrap();
    assert_eq!(
        result,
        create_test_matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![2, 3, 4], vec![5, 6, 7]])
    );
    assert_eq!(result.row_count(), a.row_count() + b.row_count());
}

#[test]
fn test_vconcat_column_mismatch() {
    let (a, b) = (m23a(), m21());
    let result = vconcat_op([Operand::from(&a), Operand::from(&b)]);
    assert!(matches!(result, Err(MatrixError::DimensionMismatch { .. })));
}

#[test]
fn test_vconcat_rejects_non_matrix_operands() {
    let (a, b) = (m23a(), m12());
    let result = vconcat_op([Operand::from(&a), Operand::from(&b), Operand::from(5i64)]);
    assert!(matches!(result, Err(MatrixError::TypeMismatch { .. })));

    let nested = vec![vec![1i64, 2, 3]];
    let custom = vconcat_op([Operand::from(&a), Operand::from(&nested)]);
    assert!(matches!(custom, Err(MatrixError::TypeMismatch { .. })));
}

#[test]
fn test_vconcat_with_vector() {
    let v = Vector::new(vec![1i64, 2]);
    let wide = m12();
    assert_eq!(
        vconcat_op([Operand::from(&wide), Operand::from(&v)]).unwrap(),
        create_test_matrix(vec![vec![1, 2], vec![1, 2]])
    );

    let tall = m21();
    assert!(matches!(
        vconcat_op([Operand::from(&tall), Operand::from(&v)]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_concat_single_and_empty() {
    let a = m23a();
    assert_eq!(hconcat_op([Operand::from(&a)]).unwrap(), a);
    assert_eq!(vconcat_op([Operand::from(&a)]).unwrap(), a);

    let none: Vec<Operand<'_, i64>> = Vec::new();
    assert_eq!(hconcat_op(none.clone()).unwrap().shape(), (0, 0));
    assert_eq!(vconcat_op(none).unwrap().shape(), (0, 0));
}

#[test]
fn test_hconcat_keeps_row_count_of_columnless_parts() {
    let a = Matrix::<i64>::zeros(3, 0);
    let b = Matrix::<i64>::zeros(3, 0);
    let result = hconcat_op([Operand::from(&a), Operand::from(&b)]).unwrap();
    assert_eq!(result.shape(), (3, 0));
}

#[test]
fn test_concat_repeats_duplicates_in_order() {
    let v = Vector::new(vec![7i64, 8]);
    let result = vconcat_op([Operand::from(&v), Operand::from(&v), Operand::from(&v)]).unwrap();
    assert_eq!(result.shape(), (3, 2));
    assert_eq!(result.as_slice(), &[7, 8, 7, 8, 7, 8]);
}
