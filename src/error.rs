//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Provides detailed context about failures including shape mismatches,
/// inner-dimension disagreements, and invalid construction data.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::ShapeMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x3".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand shapes differ for an element-wise binary operation.
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Inner dimensions disagree for a matrix product.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Supplied initial data length disagrees with the declared shape.
    InvalidData {
        /// Number of elements the shape requires
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },

    /// A declared shape is unusable (zero dimension, ragged rows).
    InvalidShape {
        /// Why the shape was rejected
        reason: String,
    },

    /// The determinant was requested for a non-square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::InvalidData { expected, actual } => {
                write!(
                    f,
                    "Invalid data length: shape requires {expected} elements, got {actual}"
                )
            }
            MatrizError::InvalidShape { reason } => {
                write!(f, "Invalid shape: {reason}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "Determinant requires a square matrix, got {rows}x{cols}"
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
    /// Create a shape mismatch error from two (rows, cols) pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrizError>;
