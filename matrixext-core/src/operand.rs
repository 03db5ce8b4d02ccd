//! Right-hand operands accepted by the matrix operations.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::arithmetic::ElementOp;
use crate::ops::traits::Element;
use crate::vector::Vector;
use std::fmt::Debug;

/// Opt-in coercion fallback for operand types the operations do not know.
///
/// When an element-wise operation receives an [`Operand::Custom`], it hands
/// the receiver matrix and the requested operation to `combine_with` and
/// returns whatever it produces.
pub trait CombineWith<T: Element>: Debug {
    fn combine_with(&self, matrix: &Matrix<T>, op: ElementOp) -> Result<Matrix<T>, MatrixError>;
}

/// Nested rows coerce themselves into a [`Matrix`] (ragged rows are a
/// dimension mismatch) and then combine like any matrix operand.
impl<T: Element> CombineWith<T> for Vec<Vec<T>> {
    fn combine_with(&self, matrix: &Matrix<T>, op: ElementOp) -> Result<Matrix<T>, MatrixError> {
        let rhs = Matrix::from_rows(self.clone())?;
        crate::ops::arithmetic::elementwise_op(matrix, Operand::Matrix(&rhs), op)
    }
}

/// The closed set of operand kinds.
///
/// Scalars, vectors and matrices are handled directly. `Custom` routes to a
/// [`CombineWith`] fallback, `Unsupported` names a foreign type that has none.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T: Element> {
    Scalar(T),
    Vector(&'a Vector<T>),
    Matrix(&'a Matrix<T>),
    Custom(&'a dyn CombineWith<T>),
    Unsupported(&'static str),
}

impl<'a, T: Element> Operand<'a, T> {
    /// Builds an [`Operand::Unsupported`] naming `U`.
    pub fn unsupported<U: ?Sized>() -> Self {
        Operand::Unsupported(std::any::type_name::<U>())
    }

    /// Short description of the operand kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Scalar",
            Operand::Vector(_) => "Vector",
            Operand::Matrix(_) => "Matrix",
            Operand::Custom(_) => "custom operand",
            Operand::Unsupported(name) => *name,
        }
    }
}

impl<'a, T: Element> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(matrix: &'a Matrix<T>) -> Self {
        Operand::Matrix(matrix)
    }
}

impl<'a, T: Element> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(vector: &'a Vector<T>) -> Self {
        Operand::Vector(vector)
    }
}

impl<'a, T: Element> From<&'a Vec<Vec<T>>> for Operand<'a, T> {
    fn from(rows: &'a Vec<Vec<T>>) -> Self {
        Operand::Custom(rows)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_operand!(i32, i64, u32, u64, f32, f64);
