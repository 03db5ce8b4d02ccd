use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Asserts that `actual` has the shape of `expected_rows` and that every
/// element lies within `tolerance` of the matching expected entry.
///
/// `expected_rows` is row-major nested slices; an empty slice means `0x0`.
/// A NaN on either side always fails.
pub fn check_matrix_near(actual: &Matrix<f64>, expected_rows: &[&[f64]], tolerance: f64) {
    let expected_cols = expected_rows.first().map_or(0, |r| r.len());
    assert_eq!(
        actual.shape(),
        (expected_rows.len(), expected_cols),
        "Shape mismatch"
    );

    for (i, expected_row) in expected_rows.iter().enumerate() {
        for (j, e) in expected_row.iter().enumerate() {
            let a = actual[(i, j)];
            let diff = (a - e).abs();
            if diff > tolerance || diff.is_nan() {
                panic!(
                    "Data mismatch at ({}, {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                    i, j, a, e, diff, tolerance
                );
            }
        }
    }
}

/// Helper to create a matrix from nested rows for testing purposes.
pub(crate) fn create_test_matrix<T: Element>(rows: Vec<Vec<T>>) -> Matrix<T> {
    Matrix::from_rows(rows).expect("Failed to create test matrix")
}
