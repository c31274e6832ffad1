use std::any::type_name;

use thiserror::Error;

/// Errors returned by array operations.
///
/// Every variant is raised before any output is built or any element is written, so a failed
/// operation leaves all arrays involved untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Two operands (or a mask and its target, or a scatter source and its selection) differ in
    /// logical length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A direct index is outside of `[0, len)` after resolving negative indices.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// A value cannot be represented in the target element type.
    #[error("element {index} cannot be converted from `{from}` to `{to}`")]
    TypeMismatch {
        index: usize,
        from: &'static str,
        to: &'static str,
    },
    /// The element type does not support the operation (eg. modulo on floats).
    #[error("{op} is not supported for `{element}` elements")]
    UnsupportedOperation {
        op: &'static str,
        element: &'static str,
    },
    /// Integer division or modulo by zero.
    #[error("integer division by zero at element {index}")]
    DivisionByZero { index: usize },
}

/// Result type for array operations.
pub type Result<T, E = ArrayError> = std::result::Result<T, E>;

/// Failure of a single element operation, not yet attributed to an array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementError {
    DivisionByZero,
    Unsupported { op: &'static str },
}

impl ElementError {
    pub(crate) fn at<T>(self, index: usize) -> ArrayError {
        match self {
            ElementError::DivisionByZero => ArrayError::DivisionByZero { index },
            ElementError::Unsupported { op } => ArrayError::UnsupportedOperation {
                op,
                element: type_name::<T>(),
            },
        }
    }
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ArrayError::LengthMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ArrayError::LengthMismatch {
                expected: 5,
                actual: 6
            }
            .to_string(),
            "length mismatch: expected 5, got 6"
        );
        assert_eq!(
            ElementError::Unsupported { op: "modulo" }
                .at::<f32>(0)
                .to_string(),
            "modulo is not supported for `f32` elements"
        );
    }
}
