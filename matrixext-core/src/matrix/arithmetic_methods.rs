use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::arithmetic::{div_op, mul_op, pow_op};
use crate::ops::cast::cast_op;
use crate::ops::concat::{hconcat_op, vconcat_op};
use crate::ops::traits::Element;

impl<T: Element> Matrix<T> {
    /// Element-wise division by a scalar, vector or matrix.
    ///
    /// A vector operand is laid out as a column when this matrix is tall
    /// (`row_count > column_count`) and as a row otherwise, see
    /// [`Orientation::for_shape`](crate::ops::shape::Orientation::for_shape).
    ///
    /// # Example
    /// ```
    /// use matrixext_core::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![2i64, 3, 4], vec![5, 6, 7]]).unwrap();
    /// let q = a.element_division(&b).unwrap();
    /// assert_eq!(q.as_slice(), &[0, 0, 0, 0, 0, 0]);
    /// ```
    pub fn element_division<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<Matrix<T>, MatrixError> {
        div_op(self, operand.into())
    }

    /// Element-wise multiplication by a scalar, vector or matrix.
    pub fn element_multiplication<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<Matrix<T>, MatrixError> {
        mul_op(self, operand.into())
    }

    /// Element-wise exponentiation by a scalar, vector or matrix of exponents.
    pub fn element_exponentiation<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<Matrix<T>, MatrixError> {
        pow_op(self, operand.into())
    }

    /// Concatenates matrices and vectors horizontally. See [`hconcat_op`].
    ///
    /// # Example
    /// ```
    /// use matrixext_core::{Matrix, Operand, Vector};
    /// let m = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
    /// let v = Vector::new(vec![1i64, 2]);
    /// let joined = Matrix::hconcat([Operand::from(&m), Operand::from(&v)]).unwrap();
    /// assert_eq!(joined.to_rows(), vec![vec![1, 2, 1], vec![3, 4, 2]]);
    /// ```
    pub fn hconcat<'a, I>(operands: I) -> Result<Matrix<T>, MatrixError>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a, T>>,
    {
        hconcat_op(operands.into_iter().map(Into::<Operand<'a, T>>::into))
    }

    /// Concatenates matrices and vectors vertically. See [`vconcat_op`].
    pub fn vconcat<'a, I>(operands: I) -> Result<Matrix<T>, MatrixError>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a, T>>,
    {
        vconcat_op(operands.into_iter().map(Into::<Operand<'a, T>>::into))
    }

    /// Converts the matrix to element type `U`. See [`cast_op`].
    pub fn cast<U: Element>(&self) -> Result<Matrix<U>, MatrixError> {
        cast_op(self)
    }
}
