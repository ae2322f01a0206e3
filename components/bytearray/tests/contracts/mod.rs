//! Contract tests for the bytearray component
//!
//! These tests pin the public API the host binding layer is written against.

use bytearray::{
    ByteArray, ByteArrayError, ByteArrayOptions, ByteArrayResult, ByteSource, GrowthStats,
};
use core_types::StaticBytes;

// =============================================================================
// Construction Contract Tests
// =============================================================================

#[test]
fn contract_new_is_live_and_empty() {
    let array = ByteArray::new();
    assert!(!array.is_released());
    assert_eq!(array.len().unwrap(), 0);
}

#[test]
fn contract_default_matches_new() {
    let array = ByteArray::default();
    assert_eq!(array.options().unwrap(), ByteArrayOptions::default());
}

#[test]
fn contract_with_options_returns_result() {
    let result: ByteArrayResult<ByteArray> = ByteArray::with_options(ByteArrayOptions::default());
    assert!(result.is_ok());
}

// =============================================================================
// Data Operation Contract Tests
// =============================================================================

#[test]
fn contract_get_returns_u8() {
    let array = ByteArray::new();
    array.append(ByteSource::Text(&[200])).unwrap();
    let byte: u8 = array.get(0).unwrap();
    assert_eq!(byte, 200);
}

#[test]
fn contract_set_accepts_wide_values() {
    let array = ByteArray::new();
    array.append(ByteSource::from("a")).unwrap();
    array.set(0, i64::MAX).unwrap();
    assert_eq!(array.get(0).unwrap(), 0xff);
}

#[test]
fn contract_append_is_chainable() {
    let array = ByteArray::new();
    let blob = StaticBytes::new(vec![b'!']);
    let len = array
        .append(ByteSource::from("hi"))
        .and_then(|a| a.append(ByteSource::Blob(&blob)))
        .and_then(|a| a.len())
        .unwrap();
    assert_eq!(len, 3);
}

#[test]
fn contract_out_of_range_distinct_from_type_fault() {
    let array = ByteArray::new();
    let index_fault = array.get(0).unwrap_err();
    let type_fault = array
        .append(ByteSource::Other { type_name: "table" })
        .unwrap_err();
    assert!(matches!(index_fault, ByteArrayError::OutOfRange { .. }));
    assert!(matches!(type_fault, ByteArrayError::InvalidArgument { .. }));
}

#[test]
fn contract_growth_stats_start_at_zero() {
    assert_eq!(
        ByteArray::new().growth_stats().unwrap(),
        GrowthStats::default()
    );
}

#[test]
fn contract_source_type_names() {
    let array = ByteArray::new();
    let blob = StaticBytes::new(vec![]);
    assert_eq!(ByteSource::from("x").type_name(), "string");
    assert_eq!(ByteSource::Blob(&blob).type_name(), "GLib.Bytes");
    assert_eq!(ByteSource::Buffer(&array).type_name(), "bytearray");
    assert_eq!(ByteSource::Other { type_name: "boolean" }.type_name(), "boolean");
}
