//! Unit tests for the Live/Released lifecycle

use bytearray::{ByteArray, ByteArrayError, ByteSource};

fn released() -> ByteArray {
    let array = ByteArray::new();
    array.append(ByteSource::from("abc")).unwrap();
    array.release().unwrap();
    array
}

fn assert_use_after_release<T: std::fmt::Debug>(
    result: Result<T, ByteArrayError>,
    operation: &str,
) {
    match result {
        Err(ByteArrayError::UseAfterRelease { operation: op }) => assert_eq!(op, operation),
        other => panic!("expected UseAfterRelease, got {:?}", other),
    }
}

#[test]
fn test_every_operation_checks_state() {
    let array = released();
    assert_use_after_release(array.len(), "len");
    assert_use_after_release(array.get(0), "get");
    assert_use_after_release(array.set(0, 1), "set");
    assert_use_after_release(array.append(ByteSource::from("x")).map(|_| ()), "append");
    assert_use_after_release(array.to_display_string(), "tostring");
    assert_use_after_release(array.to_vec(), "to_vec");
    assert_use_after_release(array.release(), "release");
}

#[test]
fn test_release_checked_before_arguments() {
    let array = released();
    let result = array.append(ByteSource::Other { type_name: "nil" });
    assert_use_after_release(result.map(|_| ()), "append");
}

#[test]
fn test_released_handle_still_droppable() {
    let array = released();
    let alias = array.clone();
    drop(array);
    assert!(alias.is_released());
}

#[test]
fn test_release_frees_for_all_aliases() {
    let array = ByteArray::new();
    let aliases: Vec<ByteArray> = (0..3).map(|_| array.clone()).collect();
    assert_eq!(array.handle_count(), 4);
    aliases[1].release().unwrap();
    assert!(aliases.iter().all(ByteArray::is_released));
    assert!(array.is_released());
}
