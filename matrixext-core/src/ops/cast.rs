use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use num_traits::NumCast;

/// Converts a matrix to another element type, creating a new matrix with the
/// same shape and the converted values.
///
/// The source matrix is not modified.
///
/// # Errors
/// Returns [`MatrixError::TypeMismatch`] if an element cannot be represented
/// in the target type (e.g. a negative value cast to an unsigned type, or a
/// NaN cast to an integer).
///
/// # Example
/// ```
/// use matrixext_core::Matrix;
/// use matrixext_core::ops::cast::cast_op;
/// let m = Matrix::from_rows(vec![vec![1.5f64, 2.0], vec![3.9, 4.0]]).unwrap();
/// let ints: Matrix<i64> = cast_op(&m).unwrap();
/// assert_eq!(ints.as_slice(), &[1, 2, 3, 4]);
/// ```
pub fn cast_op<T: Element, U: Element>(matrix: &Matrix<T>) -> Result<Matrix<U>, MatrixError> {
    let data = matrix
        .data
        .iter()
        .map(|&x| {
            <U as NumCast>::from(x).ok_or_else(|| {
                MatrixError::type_mismatch(
                    "cast",
                    std::any::type_name::<U>(),
                    format!("{:?}", x),
                )
            })
        })
        .collect::<Result<Vec<U>, MatrixError>>()?;
    Ok(Matrix { data, rows: matrix.rows, cols: matrix.cols })
}

#[cfg(test)]
#[path = "cast_test.rs"]
mod tests;
