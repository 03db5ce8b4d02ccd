//! Shape reconciliation: reinterpreting vector operands as matrices.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::traits::Element;

/// Which way a vector is laid out when viewed as a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `1xN`
    Row,
    /// `Nx1`
    Column,
}

impl Orientation {
    /// Picks the orientation a vector operand takes against a matrix of the
    /// given shape: tall matrices (`rows > cols`) get a column, everything
    /// else (including square matrices) gets a row.
    ///
    /// The square case is a consequence of the comparison, not a guarantee.
    /// Callers that need a specific layout should coerce explicitly with
    /// [`coerce`] or [`crate::Vector::to_matrix`].
    pub fn for_shape(rows: usize, cols: usize) -> Self {
        if rows > cols {
            Orientation::Column
        } else {
            Orientation::Row
        }
    }
}

/// Reinterprets a vector operand as a `1xN` or `Nx1` matrix.
///
/// Fails with [`MatrixError::TypeMismatch`] for any operand that is not a vector.
pub fn coerce<T: Element>(
    operand: Operand<'_, T>,
    orientation: Orientation,
) -> Result<Matrix<T>, MatrixError> {
    match operand {
        Operand::Vector(vector) => Ok(vector.to_matrix(orientation)),
        other => Err(MatrixError::type_mismatch("coerce", "Vector", other.kind())),
    }
}
