use thiserror::Error;

/// Error type for every fallible matrix operation.
///
/// Operations validate their inputs completely before touching storage, so
/// receiving either variant means nothing was mutated or allocated.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MatrixError {
    /// Two shapes that must agree do not (row counts, column counts, pop
    /// counts, ragged rows, data length vs. shape).
    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    /// An operand kind the operation does not understand, with no coercion
    /// fallback available.
    #[error("Type mismatch during {operation}: expected {expected}, got {actual}")]
    TypeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },
}

impl MatrixError {
    pub(crate) fn dimension_mismatch(
        operation: &str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        let err = MatrixError::DimensionMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        };
        log::debug!("{}", err);
        err
    }

    pub(crate) fn type_mismatch(
        operation: &str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        let err = MatrixError::TypeMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        };
        log::debug!("{}", err);
        err
    }
}

/// Formats a shape the way error messages print it, e.g. `2x3`.
pub(crate) fn fmt_shape(shape: (usize, usize)) -> String {
    format!("{}x{}", shape.0, shape.1)
}
