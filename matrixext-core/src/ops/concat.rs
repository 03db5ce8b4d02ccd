use crate::error::{fmt_shape, MatrixError};
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::shape::Orientation;
use crate::ops::traits::Element;
use std::borrow::Cow;

/// Type-checks every operand and turns it into a matrix.
///
/// Runs over the whole list before any dimension check so that a stray
/// scalar is reported as a type mismatch even when shapes disagree too.
fn collect_parts<'a, T, I>(
    operands: I,
    orientation: Orientation,
    operation: &str,
) -> Result<Vec<Cow<'a, Matrix<T>>>, MatrixError>
where
    T: Element,
    I: IntoIterator<Item = Operand<'a, T>>,
{
    operands
        .into_iter()
        .map(|operand| match operand {
            Operand::Matrix(matrix) => Ok(Cow::Borrowed(matrix)),
            Operand::Vector(vector) => Ok(Cow::Owned(vector.to_matrix(orientation))),
            other => Err(MatrixError::type_mismatch(operation, "Matrix or Vector", other.kind())),
        })
        .collect()
}

/// Concatenates operands horizontally (the result has more columns).
///
/// Vectors are coerced to columns. Every operand must have the row count of
/// the first one. Columns appear in argument order. An empty operand list
/// yields a `0x0` matrix.
///
/// # Errors
/// - [`MatrixError::TypeMismatch`] if any operand is not a matrix or vector.
/// - [`MatrixError::DimensionMismatch`] if row counts differ.
pub fn hconcat_op<'a, T, I>(operands: I) -> Result<Matrix<T>, MatrixError>
where
    T: Element,
    I: IntoIterator<Item = Operand<'a, T>>,
{
    let parts = collect_parts(operands, Orientation::Column, "hconcat")?;
    let Some(first) = parts.first() else {
        return Ok(Matrix { data: Vec::new(), rows: 0, cols: 0 });
    };

    let rows = first.rows;
    if let Some((i, part)) = parts.iter().enumerate().find(|(_, p)| p.rows != rows) {
        return Err(MatrixError::dimension_mismatch(
            "hconcat",
            format!("{} rows", rows),
            format!("{} rows in operand {} ({})", part.rows, i, fmt_shape(part.shape())),
        ));
    }

    let cols: usize = parts.iter().map(|p| p.cols).sum();
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for part in &parts {
            data.extend_from_slice(&part.data[i * part.cols..(i + 1) * part.cols]);
        }
    }
    Ok(Matrix { data, rows, cols })
}

/// Concatenates operands vertically (the result has more rows).
///
/// Vectors are coerced to rows. Every operand must have the column count of
/// the first one. Rows appear in argument order. An empty operand list
/// yields a `0x0` matrix.
///
/// # Errors
/// - [`MatrixError::TypeMismatch`] if any operand is not a matrix or vector.
/// - [`MatrixError::DimensionMismatch`] if column counts differ.
pub fn vconcat_op<'a, T, I>(operands: I) -> Result<Matrix<T>, MatrixError>
where
    T: Element,
    I: IntoIterator<Item = Operand<'a, T>>,
{
    let parts = collect_parts(operands, Orientation::Row, "vconcat")?;
    let Some(first) = parts.first() else {
        return Ok(Matrix { data: Vec::new(), rows: 0, cols: 0 });
    };

    let cols = first.cols;
    if let Some((i, part)) = parts.iter().enumerate().find(|(_, p)| p.cols != cols) {
        return Err(MatrixError::dimension_mismatch(
            "vconcat",
            format!("{} columns", cols),
            format!("{} columns in operand {} ({})", part.cols, i, fmt_shape(part.shape())),
        ));
    }

    let rows: usize = parts.iter().map(|p| p.rows).sum();
    let mut data = Vec::with_capacity(rows * cols);
    for part in &parts {
        data.extend_from_slice(&part.data);
    }
    Ok(Matrix { data, rows, cols })
}

// --- Tests ---
#[cfg(test)]
#[path = "concat_test.rs"]
mod tests;
