//! Unit tests for the foreign-value capability interface

use core_types::{ForeignValue, OpaqueForeign, StaticBytes, Value};
use std::rc::Rc;

struct Window;

impl ForeignValue for Window {
    fn type_name(&self) -> &str {
        "Gtk.Window"
    }

    fn as_byte_slice(&self) -> Option<&[u8]> {
        None
    }
}

#[test]
fn test_custom_foreign_type_through_value() {
    let value = Value::Foreign(Rc::new(Window));
    assert_eq!(value.type_name(), "Gtk.Window");
    match value {
        Value::Foreign(inner) => assert!(inner.as_byte_slice().is_none()),
        other => panic!("expected foreign value, got {:?}", other),
    }
}

#[test]
fn test_static_bytes_round_trips_binary() {
    let data: Vec<u8> = (0u8..=255).collect();
    let bytes = StaticBytes::new(data.clone());
    assert_eq!(bytes.as_byte_slice(), Some(&data[..]));
    assert_eq!(bytes.len(), 256);
}

#[test]
fn test_opaque_foreign_debug() {
    let value = Value::foreign(OpaqueForeign::new("Gio.Socket"));
    assert_eq!(format!("{:?}", value), "Foreign(Gio.Socket)");
}
