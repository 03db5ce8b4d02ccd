use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::arithmetic::{elementwise_op, ElementOp};
use crate::ops::traits::Element;

/// Element-wise (Hadamard) multiplication `a[i][j] * b[i][j]`.
pub fn mul_op<T: Element>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    elementwise_op(a, b, ElementOp::Multiplication)
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
