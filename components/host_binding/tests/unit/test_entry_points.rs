//! Unit tests for the module entry points

use core_types::{ErrorKind, OpaqueForeign, StaticBytes, Value};
use host_binding::ByteArrayModule;

fn setup() -> (ByteArrayModule, Value) {
    let module = ByteArrayModule::open();
    let b = module.new_array().unwrap();
    (module, b)
}

#[cfg(test)]
mod indexing_tests {
    use super::*;

    #[test]
    fn test_append_get_set_scenario() {
        let (module, b) = setup();

        module.concat(&b, &Value::string("AB")).unwrap();
        assert_eq!(module.len(&b).unwrap(), Value::Integer(2));
        assert_eq!(module.index(&b, &Value::Integer(0)).unwrap(), Value::Integer(65));
        assert_eq!(module.index(&b, &Value::Integer(1)).unwrap(), Value::Integer(66));

        module.append(&b, &Value::string("C")).unwrap();
        assert_eq!(module.len(&b).unwrap(), Value::Integer(3));
        assert_eq!(module.index(&b, &Value::Integer(2)).unwrap(), Value::Integer(67));

        let err = module.index(&b, &Value::Integer(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeError);
        assert!(err.message.contains("index out of range"));

        module
            .newindex(&b, &Value::Integer(1), &Value::Integer(0))
            .unwrap();
        assert_eq!(module.index(&b, &Value::Integer(1)).unwrap(), Value::Integer(0));
        assert_eq!(module.index(&b, &Value::Integer(0)).unwrap(), Value::Integer(65));
        assert_eq!(module.index(&b, &Value::Integer(2)).unwrap(), Value::Integer(67));
    }

    #[test]
    fn test_newindex_past_end_does_not_grow() {
        let (module, b) = setup();
        module.append(&b, &Value::string("a")).unwrap();
        let err = module
            .newindex(&b, &Value::Integer(1), &Value::Integer(0))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeError);
        assert_eq!(module.len(&b).unwrap(), Value::Integer(1));
    }

    #[test]
    fn test_newindex_truncates_value() {
        let (module, b) = setup();
        module.append(&b, &Value::string("ab")).unwrap();
        module
            .newindex(&b, &Value::Integer(0), &Value::Integer(0x1ff))
            .unwrap();
        module
            .newindex(&b, &Value::string("1"), &Value::Number(-1.0))
            .unwrap();
        assert_eq!(module.get_byte(&b, 0).unwrap(), Value::Integer(0xff));
        assert_eq!(module.get_byte(&b, 1).unwrap(), Value::Integer(0xff));
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let (module, b) = setup();
        module.append(&b, &Value::string("a")).unwrap();
        let err = module.index(&b, &Value::Integer(-1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeError);
    }

    #[test]
    fn test_integral_float_key_indexes() {
        let (module, b) = setup();
        module.append(&b, &Value::string("z")).unwrap();
        assert_eq!(
            module.index(&b, &Value::Number(0.0)).unwrap(),
            Value::Integer(122)
        );
    }

    #[test]
    fn test_string_key_is_capability_lookup() {
        let (module, b) = setup();
        module.append(&b, &Value::string("abc")).unwrap();
        assert_eq!(
            module.index(&b, &Value::string("0")).unwrap(),
            Value::Nil
        );
        assert_eq!(
            module.index(&b, &Value::string("release")).unwrap(),
            Value::NativeFunction("release".to_string())
        );
    }
}

#[cfg(test)]
mod append_tests {
    use super::*;

    #[test]
    fn test_append_blob() {
        let (module, b) = setup();
        let blob = Value::foreign(StaticBytes::new(vec![0xde, 0xad]));
        module.append(&b, &blob).unwrap();
        assert_eq!(module.len(&b).unwrap(), Value::Integer(2));
        assert_eq!(module.get_byte(&b, 1).unwrap(), Value::Integer(0xad));
    }

    #[test]
    fn test_append_number_names_type() {
        let (module, b) = setup();
        let err = module.append(&b, &Value::Integer(42)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        assert_eq!(
            err.message,
            "bad argument #2 to 'append' (string or bytes expected, got number)"
        );
    }

    #[test]
    fn test_concat_number_names_type() {
        let (module, b) = setup();
        let err = module.concat(&b, &Value::Number(1.5)).unwrap_err();
        assert!(err.message.contains("'__concat'"));
        assert!(err.message.contains("got number"));
    }

    #[test]
    fn test_append_foreign_non_blob() {
        let (module, b) = setup();
        let widget = Value::foreign(OpaqueForeign::new("Gtk.Entry"));
        let err = module.append(&b, &widget).unwrap_err();
        assert!(err.message.ends_with("got Gtk.Entry)"));
    }

    #[test]
    fn test_append_bytearray_through_generic_path_is_rejected() {
        let (module, b) = setup();
        let other = module.new_array().unwrap();
        let err = module.append(&b, &other).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        assert!(err.message.contains("append_bytearray"));
    }

    #[test]
    fn test_append_bytearray_copies() {
        let (module, b) = setup();
        let other = module.new_array().unwrap();
        module.append(&b, &Value::string("ab")).unwrap();
        module.append(&other, &Value::string("cd")).unwrap();

        module.append_bytearray(&b, &other).unwrap();
        module
            .newindex(&other, &Value::Integer(0), &Value::Integer(b'X' as i64))
            .unwrap();

        assert_eq!(module.tostring(&b).unwrap(), Value::string("abcd"));
        assert_eq!(module.tostring(&other).unwrap(), Value::string("Xd"));
    }

    #[test]
    fn test_append_bytearray_rejects_string() {
        let (module, b) = setup();
        let err = module
            .append_bytearray(&b, &Value::string("x"))
            .unwrap_err();
        assert_eq!(
            err.message,
            "bad argument #2 to 'append_bytearray' (bytearray expected, got string)"
        );
    }

    #[test]
    fn test_empty_append_is_identity() {
        let (module, b) = setup();
        module.append(&b, &Value::string("abc")).unwrap();
        module.append(&b, &Value::string("")).unwrap();
        assert_eq!(module.tostring(&b).unwrap(), Value::string("abc"));
    }

    #[test]
    fn test_chained_concat() {
        let (module, b) = setup();
        let result = module
            .concat(&b, &Value::string("a"))
            .and_then(|b| module.concat(&b, &Value::string("b")))
            .unwrap();
        assert_eq!(result, b);
        assert_eq!(module.tostring(&b).unwrap(), Value::string("ab"));
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_tostring_repairs_invalid_utf8() {
        let (module, b) = setup();
        module.append(&b, &Value::bytes(vec![0x80])).unwrap();
        assert_eq!(
            module.tostring(&b).unwrap(),
            Value::string("\u{FFFD}")
        );
    }

    #[test]
    fn test_receiver_must_be_bytearray() {
        let module = ByteArrayModule::open();
        let err = module.tostring(&Value::string("x")).unwrap_err();
        assert_eq!(
            err.message,
            "bad argument #1 to '__tostring' (bytearray expected, got string)"
        );
    }
}
