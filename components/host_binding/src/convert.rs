//! Argument unwrapping and error translation between host values and the
//! byte array engine.

use bytearray::{ByteArray, ByteArrayError, ByteSource};
use core_types::{HostError, Value};

/// Host type name reported for byte array handles
pub const TYPE_NAME: &str = "bytearray";

/// Wrap a byte array handle as a host value
pub fn to_value(array: ByteArray) -> Value {
    Value::native(array)
}

/// Returns the byte array behind `value`, if it holds one
pub fn as_bytearray(value: &Value) -> Option<ByteArray> {
    match value {
        Value::NativeObject(object) => object.borrow().downcast_ref::<ByteArray>().cloned(),
        _ => None,
    }
}

/// Host type name of `value`, naming byte arrays as such
pub fn type_name(value: &Value) -> String {
    if value.is_native::<ByteArray>() {
        TYPE_NAME.to_string()
    } else {
        value.type_name()
    }
}

/// Unwrap argument #1 of `function` as a byte array.
///
/// # Errors
///
/// Returns a TypeError naming the received type otherwise.
pub fn check_bytearray(value: &Value, function: &str) -> Result<ByteArray, HostError> {
    check_bytearray_arg(value, 1, function)
}

/// Unwrap argument `position` of `function` as a byte array
pub fn check_bytearray_arg(
    value: &Value,
    position: usize,
    function: &str,
) -> Result<ByteArray, HostError> {
    as_bytearray(value).ok_or_else(|| {
        bad_argument(
            position,
            function,
            &format!("{} expected, got {}", TYPE_NAME, type_name(value)),
        )
    })
}

/// Unwrap an integer argument, accepting numeric strings
pub fn check_integer(value: &Value, position: usize, function: &str) -> Result<i64, HostError> {
    value.to_integer().ok_or_else(|| {
        let detail = match value {
            Value::Number(_) => "number has no integer representation".to_string(),
            other => format!("number expected, got {}", type_name(other)),
        };
        bad_argument(position, function, &detail)
    })
}

/// Run `f` with `value` unwrapped into a [`ByteSource`].
///
/// Strings become text, foreign values are offered through their byte-blob
/// capability, byte arrays become buffer sources and everything else is
/// passed on by type name.
pub fn with_source<R>(value: &Value, f: impl FnOnce(ByteSource<'_>) -> R) -> R {
    match value {
        Value::String(bytes) => f(ByteSource::Text(bytes)),
        Value::Foreign(foreign) => f(ByteSource::Blob(&**foreign)),
        other => match as_bytearray(other) {
            Some(array) => f(ByteSource::Buffer(&array)),
            None => {
                let name = other.type_name();
                f(ByteSource::Other { type_name: &name })
            }
        },
    }
}

/// Format a `bad argument` error the way the host reports argument faults
pub fn bad_argument(position: usize, function: &str, detail: &str) -> HostError {
    HostError::type_error(format!(
        "bad argument #{} to '{}' ({})",
        position, function, detail
    ))
}

/// Translate an engine error raised while running `function`
pub fn host_error(err: ByteArrayError, function: &str) -> HostError {
    match err {
        ByteArrayError::OutOfRange { index, len } => HostError::range_error(format!(
            "index out of range (index {}, length {})",
            index, len
        )),
        ByteArrayError::InvalidArgument { type_name } => bad_argument(
            2,
            function,
            &format!("string or bytes expected, got {}", type_name),
        ),
        ByteArrayError::Unsupported { .. } => bad_argument(
            2,
            function,
            &format!("{}; use append_bytearray", err),
        ),
        ByteArrayError::UseAfterRelease { .. } => HostError::reference_error(err.to_string()),
        ByteArrayError::AllocationFailure { .. } => HostError::internal_error(err.to_string()),
    }
}
