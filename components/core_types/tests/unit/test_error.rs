//! Unit tests for HostError and ErrorKind

use core_types::{ErrorKind, HostError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_display_matches_name() {
        for kind in [
            ErrorKind::TypeError,
            ErrorKind::RangeError,
            ErrorKind::ReferenceError,
            ErrorKind::InternalError,
        ] {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::TypeError, ErrorKind::TypeError);
        assert_ne!(ErrorKind::TypeError, ErrorKind::RangeError);
    }

    #[test]
    fn test_error_kind_copy() {
        let kind = ErrorKind::RangeError;
        let copied = kind;
        assert_eq!(kind, copied);
    }
}

#[cfg(test)]
mod host_error_tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(HostError::type_error("x").kind, ErrorKind::TypeError);
        assert_eq!(HostError::range_error("x").kind, ErrorKind::RangeError);
        assert_eq!(
            HostError::reference_error("x").kind,
            ErrorKind::ReferenceError
        );
        assert_eq!(
            HostError::internal_error("x").kind,
            ErrorKind::InternalError
        );
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let error = HostError::new(ErrorKind::RangeError, "index out of range");
        assert_eq!(error.message, "index out of range");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let error = HostError::internal_error("allocation failed");
        assert_error(&error);
        assert_eq!(error.to_string(), "InternalError: allocation failed");
    }
}
