// src/matrix/mod.rs

use crate::error::{fmt_shape, MatrixError};

mod accessors;
mod arithmetic_methods;
pub mod create;
mod inplace_methods;
mod traits;

/// A dense, rectangular matrix stored in row-major order.
///
/// `Matrix` is a plain value type: cloning copies the elements. Every row has
/// the same length, so the element buffer always holds exactly
/// `row_count * column_count` elements. Degenerate shapes such as `3x0` or
/// `0x4` are legal and keep both counts.
///
/// Most operations return a new matrix and leave their operands untouched.
/// The pop/copy family (`hpop`, `vpop`, `hcopy`, `vcopy`) takes `&mut self`
/// and reshapes the receiver in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Matrix<T> {
    /// Row-major element storage.
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] if `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let expected = rows.checked_mul(cols);
        if expected != Some(data.len()) {
            return Err(MatrixError::dimension_mismatch(
                "from_vec",
                format!("{} elements for shape {}", rows.saturating_mul(cols), fmt_shape((rows, cols))),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a matrix from a list of rows. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::dimension_mismatch(
                "from_rows",
                format!("{} columns", cols),
                format!("{} columns in row {}", row.len(), i),
            ));
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix { data, rows: row_count, cols })
    }

    /// Creates a matrix from a list of columns. All columns must have equal length.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = columns.len();
        let rows = columns.first().map_or(0, Vec::len);
        if let Some((j, column)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(MatrixError::dimension_mismatch(
                "from_columns",
                format!("{} rows", rows),
                format!("{} rows in column {}", column.len(), j),
            ));
        }
        let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let mut data = Vec::with_capacity(rows * cols);
        for _ in 0..rows {
            // Every iterator has exactly `rows` items, checked above.
            data.extend(iters.iter_mut().filter_map(Iterator::next));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Returns `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix holds no elements (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}
