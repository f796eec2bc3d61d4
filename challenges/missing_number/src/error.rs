//! Error types shared by the validator, finder, console and orchestrator.

use std::io;

use thiserror::Error;

/// Reasons a sequence cannot be a "[0, n] with one number missing" instance.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No sequence was supplied, or it has no elements.
    #[error("input is absent or empty")]
    Empty,

    /// A value occurs more than once.
    #[error("all numbers must be distinct")]
    Duplicate {
        /// First value seen twice.
        value: i64,
    },

    /// A value lies outside `[0, n]`.
    #[error("all numbers must be in range [0, {n}]")]
    OutOfRange {
        /// First offending value.
        value: i64,
        /// Length of the sequence, the inclusive upper bound.
        n: usize,
    },
}

/// Failures of the missing-number computation itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinderError {
    #[error("invalid argument: sequence is absent")]
    Absent,

    #[error("sum overflows for n = {n}")]
    Overflow { n: usize },
}

/// Failures while reading a sequence from the user.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number '{token}': please enter space-separated integers")]
    Format { token: String },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Everything that can go wrong in one orchestrator iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Finder(#[from] FinderError),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),

    /// A collaborator panicked part way through an iteration.
    #[error("internal error")]
    Internal,
}

impl Error {
    /// Recoverable user mistakes are shown as-is; anything else is an unexpected failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::Input(InputError::Format { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "input is absent or empty");
        assert_eq!(
            ValidationError::Duplicate { value: 1 }.to_string(),
            "all numbers must be distinct"
        );
        assert_eq!(
            ValidationError::OutOfRange { value: 5, n: 3 }.to_string(),
            "all numbers must be in range [0, 3]"
        );
        let format = InputError::Format {
            token: "a".to_string(),
        };
        assert!(format.to_string().contains("space-separated integers"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(Error::from(ValidationError::Empty).is_user_error());
        assert!(
            Error::from(InputError::Format {
                token: "x".to_string()
            })
            .is_user_error()
        );
        assert!(!Error::from(FinderError::Absent).is_user_error());
        assert!(!Error::Internal.is_user_error());
        assert_eq!(Error::Internal.to_string(), "internal error");
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert!(!Error::from(InputError::Io(io)).is_user_error());
    }
}
