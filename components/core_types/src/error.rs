//! Host-facing error types.
//!
//! Errors raised through the host binding carry a kind, matching the error
//! classes the host distinguishes, and a human-readable message.

use std::fmt;
use thiserror::Error;

/// The kind of host error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument of the wrong type (e.g., appending a number)
    TypeError,
    /// Index outside the valid range
    RangeError,
    /// Use of a handle that has already been released
    ReferenceError,
    /// Unrecoverable engine failure (allocation exhaustion)
    InternalError,
}

impl ErrorKind {
    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::InternalError => "InternalError",
        }
    }

    /// Whether calling code is expected to recover from this kind
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::InternalError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error raised to the host.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, HostError};
///
/// let error = HostError::range_error("index out of range");
/// assert_eq!(error.kind, ErrorKind::RangeError);
/// assert_eq!(error.to_string(), "RangeError: index out of range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HostError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl HostError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        HostError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        HostError::new(ErrorKind::TypeError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        HostError::new(ErrorKind::RangeError, message)
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        HostError::new(ErrorKind::ReferenceError, message)
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        HostError::new(ErrorKind::InternalError, message)
    }
}

/// Result type for host-facing operations
pub type HostResult<T> = Result<T, HostError>;
