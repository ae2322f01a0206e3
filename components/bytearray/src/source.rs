//! Sources a byte array can append from

use crate::buffer::ByteArray;
use crate::error::{ByteArrayError, ByteArrayResult};
use core_types::ForeignValue;

/// A value passed to [`ByteArray::append`], already unwrapped by the host
/// binding.
#[derive(Debug, Clone, Copy)]
pub enum ByteSource<'a> {
    /// Raw bytes of a host string
    Text(&'a [u8]),
    /// A foreign value, read through its byte-blob capability
    Blob(&'a dyn ForeignValue),
    /// Another byte array. Not accepted by `append`; use
    /// [`ByteArray::append_copy_of`].
    Buffer(&'a ByteArray),
    /// Any other host value
    Other {
        /// Host type name of the value
        type_name: &'a str,
    },
}

impl<'a> ByteSource<'a> {
    /// Host type name of the source, for diagnostics
    pub fn type_name(&self) -> &'a str {
        match *self {
            ByteSource::Text(_) => "string",
            ByteSource::Blob(value) => value.type_name(),
            ByteSource::Buffer(_) => "bytearray",
            ByteSource::Other { type_name } => type_name,
        }
    }

    /// The bytes this source contributes to an append.
    pub(crate) fn bytes(&self) -> ByteArrayResult<&'a [u8]> {
        match *self {
            ByteSource::Text(bytes) => Ok(bytes),
            ByteSource::Blob(value) => {
                value
                    .as_byte_slice()
                    .ok_or_else(|| ByteArrayError::InvalidArgument {
                        type_name: value.type_name().to_string(),
                    })
            }
            ByteSource::Buffer(_) => Err(ByteArrayError::Unsupported {
                operation: "append",
                what: "bytearray sources",
            }),
            ByteSource::Other { type_name } => Err(ByteArrayError::InvalidArgument {
                type_name: type_name.to_string(),
            }),
        }
    }
}

impl<'a> From<&'a str> for ByteSource<'a> {
    fn from(text: &'a str) -> Self {
        ByteSource::Text(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteSource::Text(bytes)
    }
}
