//! # Matrix Operations Module (`ops`)
//!
//! Operations are grouped into submodules by functionality. Each one has a
//! free `xxx_op` function doing the work; the methods on
//! [`Matrix`](crate::Matrix) are thin wrappers around them.
//!
//! - [`arithmetic`]: element-wise division, multiplication and exponentiation.
//! - [`concat`]: horizontal and vertical concatenation.
//! - [`shape`]: vector-to-matrix coercion and orientation choice.
//! - [`cast`]: element type conversion.
//! - [`traits`]: the [`Element`](traits::Element) bound shared by all of them.

pub mod arithmetic;
pub mod cast;
pub mod concat;
pub mod shape;
pub mod traits;
