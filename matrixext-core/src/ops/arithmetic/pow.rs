// matrixext-core/src/ops/arithmetic/pow.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::arithmetic::{elementwise_op, ElementOp};
use crate::ops::traits::Element;

/// Element-wise exponentiation `a[i][j] ^ b[i][j]`.
///
/// A scalar exponent is applied to every element uniformly; this is never a
/// matrix power.
pub fn pow_op<T: Element>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    elementwise_op(a, b, ElementOp::Exponentiation)
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
