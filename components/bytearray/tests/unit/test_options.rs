//! Unit tests for ByteArrayOptions configuration

use bytearray::{ByteArray, ByteArrayOptions, ByteSource, DEFAULT_MIN_GROWTH};

#[test]
fn test_options_from_empty_json_are_defaults() {
    let options: ByteArrayOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ByteArrayOptions::default());
}

#[test]
fn test_options_from_json() {
    let options: ByteArrayOptions =
        serde_json::from_str(r#"{"initial_capacity": 128, "max_length": 4096}"#).unwrap();
    assert_eq!(options.initial_capacity, 128);
    assert_eq!(options.min_growth, DEFAULT_MIN_GROWTH);
    assert_eq!(options.max_length, Some(4096));
}

#[test]
fn test_options_reject_unknown_fields() {
    let result: Result<ByteArrayOptions, _> = serde_json::from_str(r#"{"capacity": 1}"#);
    assert!(result.is_err());
}

#[test]
fn test_options_are_kept_by_the_array() {
    let options = ByteArrayOptions::default().with_min_growth(64);
    let array = ByteArray::with_options(options).unwrap();
    assert_eq!(array.options().unwrap(), options);

    array.append(ByteSource::from("a")).unwrap();
    assert_eq!(array.capacity().unwrap(), 64);
}

#[test]
fn test_initial_capacity_clamped_to_max_length() {
    let options = ByteArrayOptions::default()
        .with_initial_capacity(1 << 20)
        .with_max_length(Some(16));
    let array = ByteArray::with_options(options).unwrap();
    assert!(array.capacity().unwrap() <= 16);
}

#[test]
fn test_max_length_error_leaves_contents() {
    let options = ByteArrayOptions::default().with_max_length(Some(3));
    let array = ByteArray::with_options(options).unwrap();
    array.append(ByteSource::from("ab")).unwrap();
    let err = array.append(ByteSource::from("cd")).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(array.to_vec().unwrap(), b"ab");
}
