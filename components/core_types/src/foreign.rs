//! Capability interface for opaque values owned by the host.
//!
//! The host hands byte arrays values it owns (GLib byte blobs, userdata of
//! other modules, ...). Byte arrays never look inside those values directly;
//! they only ask through [`ForeignValue`].

use std::fmt;

/// A value owned by the host that byte arrays may be asked to read from.
///
/// # Examples
///
/// ```
/// use core_types::ForeignValue;
///
/// struct Blob(Vec<u8>);
///
/// impl ForeignValue for Blob {
///     fn type_name(&self) -> &str {
///         "GLib.Bytes"
///     }
///
///     fn as_byte_slice(&self) -> Option<&[u8]> {
///         Some(&self.0)
///     }
/// }
///
/// let blob = Blob(b"abc".to_vec());
/// assert_eq!(blob.as_byte_slice(), Some(&b"abc"[..]));
/// ```
pub trait ForeignValue {
    /// The type name the host declares for this value.
    fn type_name(&self) -> &str;

    /// The bytes of this value if it is an immutable byte blob.
    ///
    /// Values that are not byte blobs return `None`.
    fn as_byte_slice(&self) -> Option<&[u8]>;
}

impl<'a> fmt::Debug for dyn ForeignValue + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foreign({})", self.type_name())
    }
}

/// An immutable byte blob, as handed out by GLib's `GBytes`.
///
/// # Examples
///
/// ```
/// use core_types::{ForeignValue, StaticBytes};
///
/// let bytes = StaticBytes::new(vec![1, 2, 3]);
/// assert_eq!(bytes.type_name(), "GLib.Bytes");
/// assert_eq!(bytes.as_byte_slice(), Some(&[1u8, 2, 3][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBytes {
    data: Box<[u8]>,
}

impl StaticBytes {
    /// Type name reported to the host
    pub const TYPE_NAME: &'static str = "GLib.Bytes";

    /// Wrap a byte vector as an immutable blob
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        StaticBytes {
            data: data.into().into_boxed_slice(),
        }
    }

    /// Number of bytes in the blob
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the blob holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ForeignValue for StaticBytes {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn as_byte_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

/// A foreign value that is not a byte blob.
///
/// Stands in for any other object the host may pass around (a widget,
/// a file handle, ...). It only reports its type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueForeign {
    type_name: String,
}

impl OpaqueForeign {
    /// Create an opaque value with the given type name
    pub fn new(type_name: impl Into<String>) -> Self {
        OpaqueForeign {
            type_name: type_name.into(),
        }
    }
}

impl ForeignValue for OpaqueForeign {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn as_byte_slice(&self) -> Option<&[u8]> {
        None
    }
}
