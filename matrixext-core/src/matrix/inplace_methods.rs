use crate::error::{fmt_shape, MatrixError};
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use log::trace;

impl<T: Element> Matrix<T> {
    /// Removes the last `count` columns (destructive).
    ///
    /// Returns the removed columns as a new `rows x count` matrix, in their
    /// original order. Removing every column is rejected: `count` must be
    /// strictly less than `column_count`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if `count >= column_count`; the
    /// matrix is left unchanged.
    pub fn hpop(&mut self, count: usize) -> Result<Matrix<T>, MatrixError> {
        if count >= self.cols {
            return Err(MatrixError::dimension_mismatch(
                "hpop",
                format!("more than {} columns", count),
                format!("{} columns ({})", self.cols, fmt_shape(self.shape())),
            ));
        }
        trace!("hpop: removing {} trailing columns from {}", count, fmt_shape(self.shape()));

        let keep = self.cols - count;
        let mut kept = Vec::with_capacity(self.rows * keep);
        let mut popped = Vec::with_capacity(self.rows * count);
        // cols > count >= 0, so chunks are non-empty
        for row in self.data.chunks(self.cols) {
            kept.extend_from_slice(&row[..keep]);
            popped.extend_from_slice(&row[keep..]);
        }
        self.data = kept;
        self.cols = keep;

        Ok(Matrix { data: popped, rows: self.rows, cols: count })
    }

    /// Removes the last `count` rows (destructive).
    ///
    /// Returns the removed rows as a new `count x cols` matrix, in their
    /// original order. `count` must be strictly less than `row_count`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] if `count >= row_count`; the matrix
    /// is left unchanged.
    pub fn vpop(&mut self, count: usize) -> Result<Matrix<T>, MatrixError> {
        if count >= self.rows {
            return Err(MatrixError::dimension_mismatch(
                "vpop",
                format!("more than {} rows", count),
                format!("{} rows ({})", self.rows, fmt_shape(self.shape())),
            ));
        }
        trace!("vpop: removing {} trailing rows from {}", count, fmt_shape(self.shape()));

        let keep = self.rows - count;
        let popped = self.data.split_off(keep * self.cols);
        self.rows = keep;

        Ok(Matrix { data: popped, rows: count, cols: self.cols })
    }

    /// Appends `n` more copies of the original rows below them (destructive).
    ///
    /// `vcopy(1)` doubles the row count. Returns the receiver for chaining.
    pub fn vcopy(&mut self, n: usize) -> &mut Self {
        trace!("vcopy: appending {} row copies to {}", n, fmt_shape(self.shape()));
        let original_len = self.data.len();
        self.data.reserve(original_len * n);
        for _ in 0..n {
            self.data.extend_from_within(..original_len);
        }
        self.rows *= n + 1;
        self
    }

    /// Appends `n` more copies of the original columns to the right (destructive).
    ///
    /// `hcopy(1)` doubles the column count. Returns the receiver for chaining.
    pub fn hcopy(&mut self, n: usize) -> &mut Self {
        trace!("hcopy: appending {} column copies to {}", n, fmt_shape(self.shape()));
        if self.cols > 0 {
            let mut data = Vec::with_capacity(self.data.len() * (n + 1));
            for row in self.data.chunks(self.cols) {
                for _ in 0..=n {
                    data.extend_from_slice(row);
                }
            }
            self.data = data;
        }
        self.cols *= n + 1;
        self
    }
}

#[cfg(test)]
#[path = "inplace_methods_test.rs"]
mod tests;
