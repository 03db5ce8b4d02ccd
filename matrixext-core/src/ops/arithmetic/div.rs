use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::arithmetic::{elementwise_op, ElementOp};
use crate::ops::traits::Element;

/// Element-wise division `a[i][j] / b[i][j]`.
///
/// Zero divisors follow the element type: integer division panics, float
/// division produces `inf`/`NaN`. Integer quotients truncate.
pub fn div_op<T: Element>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    elementwise_op(a, b, ElementOp::Division)
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
