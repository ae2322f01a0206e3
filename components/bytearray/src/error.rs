//! Error types for byte array operations

use thiserror::Error;

/// Errors reported by [`ByteArray`](crate::ByteArray) operations.
///
/// `OutOfRange`, `InvalidArgument` and `Unsupported` are recoverable and
/// carry enough detail for the host to format a message. `AllocationFailure`
/// is fatal: callers are not expected to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteArrayError {
    /// Indexed access outside `[0, len)`
    #[error("index {index} out of range for bytearray of length {len}")]
    OutOfRange {
        /// The offending index
        index: i64,
        /// Length of the byte array at the time of the call
        len: usize,
    },

    /// Append source of a type that cannot provide bytes
    #[error("cannot append a value of type {type_name}")]
    InvalidArgument {
        /// Type name of the offending value
        type_name: String,
    },

    /// Operation declared but not available through this path
    #[error("{operation} does not support {what}")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
        /// What was asked for
        what: &'static str,
    },

    /// Memory for the requested length could not be obtained
    #[error("cannot grow bytearray to {requested} bytes: {reason}")]
    AllocationFailure {
        /// Length the byte array needed to reach
        requested: usize,
        /// Why the allocation failed
        reason: String,
    },

    /// Operation on a handle that has been released
    #[error("bytearray used after release in {operation}")]
    UseAfterRelease {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl ByteArrayError {
    /// Whether this error ends the operation without any chance of recovery
    pub fn is_fatal(&self) -> bool {
        matches!(self, ByteArrayError::AllocationFailure { .. })
    }
}

/// Result type for byte array operations
pub type ByteArrayResult<T> = Result<T, ByteArrayError>;
