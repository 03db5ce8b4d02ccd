// src/matrix/traits.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::traits::Element;
use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul};

// --- Trait Implementations ---

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Returns the element at `(row, column)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds. Use [`Matrix::get`] for a
    /// checked lookup.
    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + column]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Formats as nested rows, e.g. `Matrix[[1, 2], [3, 4]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix[")?;
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// Whole-matrix scalar arithmetic. The element-wise operations delegate their
// scalar paths here.

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        &self * scalar
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Divides every element by `scalar` using the element type's division.
    fn div(self, scalar: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x / scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Element> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, scalar: T) -> Matrix<T> {
        &self / scalar
    }
}

impl<'a, T: Element> TryFrom<Operand<'a, T>> for Matrix<T> {
    type Error = MatrixError;

    /// Converts a matrix operand into an owned matrix by copying its column
    /// data across. Every other operand kind is a type mismatch.
    fn try_from(operand: Operand<'a, T>) -> Result<Self, MatrixError> {
        match operand {
            Operand::Matrix(matrix) => {
                let columns = (0..matrix.cols).filter_map(|j| matrix.column(j)).collect();
                let mut converted = Matrix::from_columns(columns)?;
                // from_columns cannot recover the row count of a matrix without columns
                converted.rows = matrix.rows;
                Ok(converted)
            }
            other => Err(MatrixError::type_mismatch("convert", "Matrix", other.kind())),
        }
    }
}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
