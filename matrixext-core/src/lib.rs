//! # matrixext-core
//!
//! A dense, row-major [`Matrix`] type with the operations a minimal matrix
//! library leaves out:
//!
//! - horizontal/vertical concatenation ([`Matrix::hconcat`], [`Matrix::vconcat`]);
//! - destructive extraction of trailing columns/rows ([`Matrix::hpop`], [`Matrix::vpop`]);
//! - in-place duplication of columns/rows ([`Matrix::hcopy`], [`Matrix::vcopy`]);
//! - element-wise division, multiplication and exponentiation against a
//!   scalar, a [`Vector`] or another matrix.
//!
//! Operands are described by the closed [`Operand`] enum; types outside it can
//! opt into element-wise arithmetic by implementing [`CombineWith`].
//! Every fallible operation returns a [`MatrixError`] and validates its
//! inputs before touching any storage.

pub mod error;
pub mod matrix;
pub mod operand;
pub mod ops;
pub(crate) mod utils;
pub mod vector;

// Re-export the main types so they are reachable as `matrixext_core::Matrix` etc.
pub use error::MatrixError;
pub use matrix::Matrix;
pub use operand::{CombineWith, Operand};
pub use ops::arithmetic::ElementOp;
pub use ops::shape::Orientation;
pub use ops::traits::Element;
pub use vector::Vector;
// Re-export traits required by public functions/structs
pub use num_traits;
