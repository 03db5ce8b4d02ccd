// Element-wise arithmetic between a matrix and a scalar, vector or matrix.
pub mod div;
pub mod mul;
pub mod pow;

pub use div::div_op;
pub use mul::mul_op;
pub use pow::pow_op;

use crate::error::{fmt_shape, MatrixError};
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::ops::shape::Orientation;
use crate::ops::traits::Element;

/// The binary operators applied element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementOp {
    Division,
    Multiplication,
    Exponentiation,
}

impl ElementOp {
    /// Applies the operator to one pair of elements.
    pub fn apply<T: Element>(self, lhs: T, rhs: T) -> T {
        match self {
            ElementOp::Division => lhs / rhs,
            ElementOp::Multiplication => lhs * rhs,
            ElementOp::Exponentiation => lhs.pow_elem(rhs),
        }
    }

    /// Name of the public operation, used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            ElementOp::Division => "element_division",
            ElementOp::Multiplication => "element_multiplication",
            ElementOp::Exponentiation => "element_exponentiation",
        }
    }
}

/// Shared kernel for the element-wise operations.
///
/// Dispatch on the operand kind:
/// - scalar: applied to every element, no shape check;
/// - vector: coerced with [`Orientation::for_shape`] of `lhs`, then treated as a matrix;
/// - matrix: shapes must match exactly;
/// - custom: delegated to its [`CombineWith`](crate::CombineWith) fallback;
/// - unsupported: type mismatch.
pub(crate) fn elementwise_op<T: Element>(
    lhs: &Matrix<T>,
    operand: Operand<'_, T>,
    op: ElementOp,
) -> Result<Matrix<T>, MatrixError> {
    let coerced;
    let rhs: &Matrix<T> = match operand {
        Operand::Scalar(scalar) => return Ok(scalar_op(lhs, scalar, op)),
        Operand::Vector(vector) => {
            coerced = vector.to_matrix(Orientation::for_shape(lhs.rows, lhs.cols));
            &coerced
        }
        Operand::Matrix(matrix) => matrix,
        Operand::Custom(custom) => {
            log::trace!("{}: delegating to custom operand {:?}", op.name(), custom);
            return custom.combine_with(lhs, op);
        }
        Operand::Unsupported(name) => {
            return Err(MatrixError::type_mismatch(
                op.name(),
                "Scalar, Vector or Matrix",
                name,
            ));
        }
    };

    if rhs.shape() != lhs.shape() {
        return Err(MatrixError::dimension_mismatch(
            op.name(),
            fmt_shape(lhs.shape()),
            fmt_shape(rhs.shape()),
        ));
    }

    let data = lhs
        .data
        .iter()
        .zip(rhs.data.iter())
        .map(|(&a, &b)| op.apply(a, b))
        .collect();
    Ok(Matrix { data, rows: lhs.rows, cols: lhs.cols })
}

fn scalar_op<T: Element>(lhs: &Matrix<T>, scalar: T, op: ElementOp) -> Matrix<T> {
    match op {
        ElementOp::Division => lhs / scalar,
        ElementOp::Multiplication => lhs * scalar,
        ElementOp::Exponentiation => Matrix {
            data: lhs.data.iter().map(|&x| x.pow_elem(scalar)).collect(),
            rows: lhs.rows,
            cols: lhs.cols,
        },
    }
}
