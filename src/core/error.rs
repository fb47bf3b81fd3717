//! Error handling logic

use std::fmt;

/// Error types raised by the simulation core and its reporting layer.
///
/// Parameter problems are detected at entry and reported immediately; the
/// simulation never proceeds with a value it had to guess at. A trial whose
/// sifting leaves no positions is *not* an error (its rate is defined as 0).
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QkdError {
    /// A caller supplied a parameter outside its valid domain
    /// (noise probability outside [0,1], zero trials, zero length, ...).
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// Two sequences that must be compared position by position differ in length.
    /// This is a programming-contract violation, not a user error.
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },

    /// A sifted position points past the end of the sequence it selects from.
    /// Like `LengthMismatch`, this is a contract violation between stages.
    SiftIndexOutOfRange {
        /// The offending position
        index: usize,
        /// Length of the sequence being indexed
        length: usize,
    },

    /// An experiment configuration could not be read or parsed.
    Config {
        /// Config failure message
        message: String,
    },

    /// Persisting results failed.
    Report {
        /// Report failure message
        message: String,
    },
}

impl QkdError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        QkdError::InvalidParameter { message: message.into() }
    }
}

impl fmt::Display for QkdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QkdError::InvalidParameter { message } => write!(f, "Invalid Parameter: {}", message),
            QkdError::LengthMismatch { left, right } => {
                write!(f, "Length Mismatch: cannot compare sequences of length {} and {}", left, right)
            }
            QkdError::SiftIndexOutOfRange { index, length } => {
                write!(f, "Sift Index Out Of Range: position {} in a sequence of length {}", index, length)
            }
            QkdError::Config { message } => write!(f, "Configuration Error: {}", message),
            QkdError::Report { message } => write!(f, "Report Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QkdError {}

impl From<std::io::Error> for QkdError {
    fn from(err: std::io::Error) -> Self {
        QkdError::Report { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let err = QkdError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "Length Mismatch: cannot compare sequences of length 3 and 4");

        let err = QkdError::invalid("trials must be positive");
        assert_eq!(err.to_string(), "Invalid Parameter: trials must be positive");

        let err = QkdError::SiftIndexOutOfRange { index: 4, length: 4 };
        assert_eq!(err.to_string(), "Sift Index Out Of Range: position 4 in a sequence of length 4");
    }

    #[test]
    fn test_io_errors_become_report_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        match QkdError::from(io) {
            QkdError::Report { message } => assert!(message.contains("read-only")),
            other => panic!("unexpected variant {:?}", other),
        }
    }
}
