//! Host value representation.
//!
//! This module provides the `Value` enum through which arguments and results
//! travel between the host interpreter and native modules.

use crate::foreign::ForeignValue;
use num_traits::ToPrimitive;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Represents any value the host can pass to a native module.
///
/// Host strings are byte strings: they may hold arbitrary binary data and
/// are therefore stored as `Vec<u8>` rather than `String`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let nil = Value::Nil;
/// let number = Value::Integer(42);
/// let text = Value::string("AB");
///
/// assert!(!nil.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(text.type_name(), "string");
/// ```
#[derive(Clone)]
pub enum Value {
    /// Absence of a value
    Nil,
    /// Boolean (true or false)
    Boolean(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Byte string
    String(Vec<u8>),
    /// Value owned by the host, readable through [`ForeignValue`]
    Foreign(Rc<dyn ForeignValue>),
    /// Native object created by a module (e.g., a byte array handle)
    NativeObject(Rc<RefCell<dyn Any>>),
    /// Native function reference by name
    NativeFunction(String),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(s))
                .finish(),
            Value::Foreign(v) => write!(f, "{:?}", v),
            Value::NativeObject(_) => write!(f, "NativeObject(...)"),
            Value::NativeFunction(name) => f.debug_tuple("NativeFunction").field(name).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Integer(a), Value::Number(b)) | (Value::Number(b), Value::Integer(a)) => {
                b.fract() == 0.0 && b.to_i64() == Some(*a)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Foreign(a), Value::Foreign(b)) => Rc::ptr_eq(a, b),
            (Value::NativeObject(a), Value::NativeObject(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Create a string value from text
    pub fn string(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }

    /// Create a string value from raw bytes
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::String(b.into())
    }

    /// Wrap a foreign value
    pub fn foreign<T: ForeignValue + 'static>(value: T) -> Self {
        Value::Foreign(Rc::new(value))
    }

    /// Wrap a native object
    pub fn native<T: Any>(object: T) -> Self {
        Value::NativeObject(Rc::new(RefCell::new(object)))
    }

    /// Returns whether this value is truthy.
    ///
    /// Only `nil` and `false` are falsy; every number (including 0) and
    /// every string (including the empty string) is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::string("").is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    /// Returns the host type name of this value.
    ///
    /// Foreign values report the type name they declare.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{StaticBytes, Value};
    ///
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// assert_eq!(Value::Number(1.5).type_name(), "number");
    /// assert_eq!(Value::foreign(StaticBytes::new(vec![])).type_name(), "GLib.Bytes");
    /// ```
    pub fn type_name(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Boolean(_) => "boolean".to_string(),
            Value::Integer(_) | Value::Number(_) => "number".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Foreign(v) => v.type_name().to_string(),
            Value::NativeObject(_) => "userdata".to_string(),
            Value::NativeFunction(_) => "function".to_string(),
        }
    }

    /// Returns the integer held by this value, if it is one.
    ///
    /// Floats count only when they have no fractional part and fit in an
    /// `i64`. Strings are never integers here; see [`Value::to_integer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_integer(), Some(3));
    /// assert_eq!(Value::Number(3.0).as_integer(), Some(3));
    /// assert_eq!(Value::Number(3.5).as_integer(), None);
    /// assert_eq!(Value::string("3").as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Number(n) if n.fract() == 0.0 => n.to_i64(),
            _ => None,
        }
    }

    /// Converts this value to an integer, accepting numeric strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::string(" 42 ").to_integer(), Some(42));
    /// assert_eq!(Value::string("7.0").to_integer(), Some(7));
    /// assert_eq!(Value::string("x").to_integer(), None);
    /// ```
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::String(bytes) => {
                let text = std::str::from_utf8(bytes).ok()?.trim();
                if let Ok(n) = text.parse::<i64>() {
                    return Some(n);
                }
                Value::Number(text.parse::<f64>().ok()?).as_integer()
            }
            other => other.as_integer(),
        }
    }

    /// Returns the bytes of a string value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns whether this value is a native object of type `T`
    pub fn is_native<T: Any>(&self) -> bool {
        match self {
            Value::NativeObject(obj) => obj.borrow().is::<T>(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "inf")
                    } else {
                        write!(f, "-inf")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", String::from_utf8_lossy(s)),
            Value::Foreign(v) => write!(f, "{}", v.type_name()),
            Value::NativeObject(_) => write!(f, "userdata"),
            Value::NativeFunction(name) => write!(f, "function: builtin: {}", name),
        }
    }
}
