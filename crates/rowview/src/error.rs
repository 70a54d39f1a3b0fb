//! Error types for the model layer.

use std::fmt;

/// The main error type for model operations.
///
/// These represent precondition violations on the caller's side - an unknown
/// column id, or an index past the end of the collection. They are never
/// retried and carry enough context to make the violated bound obvious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// A column id does not exist in the column set.
    InvalidColumn {
        /// The offending column id.
        column: usize,
        /// The number of columns actually defined.
        column_count: usize,
    },
    /// A column order vector is not a permutation of the column ids.
    InvalidColumnOrder {
        /// The number of columns the order vector must cover exactly once.
        expected: usize,
    },
    /// A row index is past the end of the collection.
    OutOfRange {
        /// The offending row index.
        index: usize,
        /// The number of rows actually present.
        len: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumn {
                column,
                column_count,
            } => {
                write!(
                    f,
                    "invalid column id {column} (column set has {column_count} columns)"
                )
            }
            Self::InvalidColumnOrder { expected } => {
                write!(
                    f,
                    "column order is not a permutation of the {expected} column ids"
                )
            }
            Self::OutOfRange { index, len } => {
                write!(f, "row index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// A specialized Result type for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidColumn {
            column: 7,
            column_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid column id 7 (column set has 3 columns)"
        );

        let err = ModelError::OutOfRange { index: 4, len: 4 };
        assert_eq!(err.to_string(), "row index 4 out of range (len 4)");
    }
}
