//! Unit tests for construction options, release and finalization

use bytearray::ByteArrayOptions;
use core_types::{ErrorKind, Value};
use host_binding::ByteArrayModule;

#[test]
fn test_release_then_use_is_reference_error() {
    let module = ByteArrayModule::open();
    let b = module.new_array().unwrap();
    module.release(&b).unwrap();

    let err = module.len(&b).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ReferenceError);
    let err = module.release(&b).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ReferenceError);
}

#[test]
fn test_finalizer_releases_once() {
    let module = ByteArrayModule::open();
    let b = module.new_array().unwrap();
    let mut finalizer = module.finalizer(&b).unwrap();

    assert!(finalizer.finalize());
    assert!(!finalizer.finalize());
    assert_eq!(module.len(&b).unwrap_err().kind, ErrorKind::ReferenceError);
}

#[test]
fn test_finalizer_requires_bytearray() {
    let module = ByteArrayModule::open();
    let err = module.finalizer(&Value::Nil).unwrap_err();
    assert!(err.message.contains("'__gc'"));
}

#[test]
fn test_gc_method_is_release() {
    let module = ByteArrayModule::open();
    let b = module.new_array().unwrap();
    assert_eq!(module.call_method(&b, "__gc", &[]).unwrap(), Value::Nil);
    assert_eq!(module.len(&b).unwrap_err().kind, ErrorKind::ReferenceError);
}

#[test]
fn test_module_options_apply_to_new_arrays() {
    let options = ByteArrayOptions::default().with_max_length(Some(2));
    let module = ByteArrayModule::with_options(options);
    let b = module.new_array().unwrap();

    module.append(&b, &Value::string("ab")).unwrap();
    let err = module.append(&b, &Value::string("c")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InternalError);
    assert!(err.kind.is_fatal());
    assert_eq!(module.len(&b).unwrap(), Value::Integer(2));
}
