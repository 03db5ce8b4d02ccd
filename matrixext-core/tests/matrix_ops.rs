use matrixext_core::{Matrix, MatrixError, Operand, Vector};

mod common;
use common::{create_test_matrix, init_logger};

#[test]
fn test_integer_division_is_not_promoted() {
    init_logger();
    let a = create_test_matrix(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
    let b = create_test_matrix(vec![vec![2i64, 3, 4], vec![5, 6, 7]]);
    let q = a.element_division(&b).unwrap();
    assert_eq!(q.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
}

#[test]
fn test_elementwise_ops_match_definition() {
    init_logger();
    let a = Matrix::<f64>::build(3, 2, |i, j| (i + 2 * j) as f64 + 1.0);
    let b = Matrix::<f64>::build(3, 2, |i, j| (i * j) as f64 + 0.5);

    let product = a.element_multiplication(&b).unwrap();
    let quotient = a.element_division(&b).unwrap();
    let power = a.element_exponentiation(&b).unwrap();
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(product[(i, j)], a[(i, j)] * b[(i, j)]);
            assert_eq!(quotient[(i, j)], a[(i, j)] / b[(i, j)]);
            assert_eq!(power[(i, j)], a[(i, j)].powf(b[(i, j)]));
        }
    }
}

#[test]
fn test_scalar_and_vector_operands() {
    init_logger();
    let m = create_test_matrix(vec![vec![2i64, 4], vec![6, 8], vec![10, 12]]);
    assert_eq!(
        m.element_multiplication(3i64).unwrap().to_rows(),
        vec![vec![6, 12], vec![18, 24], vec![30, 36]]
    );

    // Tall receiver: the vector becomes a 3x1 column, which does not fit 3x2
    let v = Vector::new(vec![1i64, 2, 3]);
    assert!(matches!(
        m.element_division(&v),
        Err(MatrixError::DimensionMismatch { .. })
    ));

    let column = create_test_matrix(vec![vec![2i64], vec![6], vec![9]]);
    assert_eq!(column.element_division(&v).unwrap().to_rows(), vec![vec![2], vec![3], vec![3]]);
}

#[test]
fn test_hconcat_with_vector_scenario() {
    init_logger();
    let m = create_test_matrix(vec![vec![1i64, 2], vec![3, 4]]);
    let v = Vector::new(vec![1i64, 2]);
    let joined = Matrix::hconcat([Operand::from(&m), Operand::from(&v)]).unwrap();
    assert_eq!(joined, create_test_matrix(vec![vec![1, 2, 1], vec![3, 4, 2]]));
}

#[test]
fn test_concat_dimension_properties() {
    init_logger();
    let a = Matrix::<i64>::ones(2, 3);
    let b = Matrix::<i64>::zeros(2, 5);
    let c = Matrix::<i64>::zeros(4, 3);

    let wide = Matrix::hconcat([&a, &b]).unwrap();
    assert_eq!(wide.column_count(), a.column_count() + b.column_count());
    assert_eq!(wide.row_count(), 2);
    assert!(matches!(
        Matrix::hconcat([&a, &c]),
        Err(MatrixError::DimensionMismatch { .. })
    ));

    let tall = Matrix::vconcat([&a, &c]).unwrap();
    assert_eq!(tall.row_count(), a.row_count() + c.row_count());
    assert!(matches!(
        Matrix::vconcat([&a, &b]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_hpop_then_hconcat_restores_original() {
    init_logger();
    let original = Matrix::<i64>::build(3, 5, |i, j| (i * 5 + j) as i64);
    for k in 0..5 {
        let mut m = original.clone();
        let popped = m.hpop(k).unwrap();
        assert_eq!(m.column_count(), 5 - k);
        assert_eq!(Matrix::hconcat([&m, &popped]).unwrap(), original);
    }
}

#[test]
fn test_vpop_then_vconcat_restores_original() {
    init_logger();
    let original = Matrix::<i64>::build(4, 2, |i, j| (i * 2 + j) as i64);
    for k in 0..4 {
        let mut m = original.clone();
        let popped = m.vpop(k).unwrap();
        assert_eq!(Matrix::vconcat([&m, &popped]).unwrap(), original);
    }
}

#[test]
fn test_pop_boundary() {
    init_logger();
    let mut m = Matrix::<i64>::ones(2, 3);
    let cols = m.column_count();
    assert!(matches!(m.hpop(cols), Err(MatrixError::DimensionMismatch { .. })));
    assert!(matches!(m.hpop(cols + 10), Err(MatrixError::DimensionMismatch { .. })));
    let rows = m.row_count();
    assert!(matches!(m.vpop(rows), Err(MatrixError::DimensionMismatch { .. })));
    assert_eq!(m.shape(), (2, 3));
}

#[test]
fn test_vcopy_doubles_rows() {
    init_logger();
    let original = Matrix::<i64>::build(3, 2, |i, j| (i * 7 + j) as i64);
    let mut m = original.clone();
    m.vcopy(1);
    assert_eq!(m.row_count(), 2 * original.row_count());
    let second_half = m.vpop(original.row_count()).unwrap();
    assert_eq!(second_half, original);
    assert_eq!(m, original);
}

#[test]
fn test_hcopy_equals_hconcat_with_itself() {
    init_logger();
    let original = Matrix::<i64>::build(2, 3, |i, j| (i + j) as i64);
    let mut m = original.clone();
    m.hcopy(2);
    assert_eq!(m, Matrix::hconcat([&original, &original, &original]).unwrap());
}

#[test]
fn test_cast_then_operate() {
    init_logger();
    let ints = create_test_matrix(vec![vec![1i64, 2], vec![3, 4]]);
    let floats: Matrix<f64> = ints.cast().unwrap();
    let halves = floats.element_division(2.0f64).unwrap();
    assert_eq!(halves.as_slice(), &[0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_nested_rows_fallback() {
    init_logger();
    let m = create_test_matrix(vec![vec![1i64, 2], vec![3, 4]]);
    let nested = vec![vec![1i64, 2], vec![2, 1]];
    let result = m.element_exponentiation(&nested).unwrap();
    assert_eq!(result.to_rows(), vec![vec![1, 4], vec![9, 4]]);
}
