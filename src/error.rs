//! Error types for matriz operations.

use std::fmt;

/// Main error type for matriz operations.
///
/// Raised only by the validated [`Matrix`](crate::primitives::Matrix) layer;
/// the flat kernel signals singularity through an empty buffer instead.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A square matrix was required.
    NotSquare {
        /// Rows found
        rows: usize,
        /// Columns found
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Order of the offending square matrix
        order: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrizError::SingularMatrix { order } => {
                write!(
                    f,
                    "Singular matrix detected: no usable pivot in {order}x{order} input, cannot invert"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
