//! Growable byte arrays for a scripting host
//!
//! This crate provides the byte array engine behind the host's `bytearray`
//! module:
//! - [`ByteArray`]: a reference-counted, growable sequence of bytes with
//!   bounds-checked indexed access
//! - [`ByteSource`]: the host values a byte array can append from
//! - [`ByteArrayOptions`]: construction options (initial capacity, limits)
//! - [`ByteArrayError`]: recoverable and fatal failures
//!
//! # Example
//!
//! ```
//! use bytearray::{ByteArray, ByteArrayError, ByteSource};
//! use core_types::StaticBytes;
//!
//! let array = ByteArray::new();
//! array.append(ByteSource::from("AB")).unwrap();
//!
//! let blob = StaticBytes::new(vec![0xff]);
//! array.append(ByteSource::Blob(&blob)).unwrap();
//!
//! assert_eq!(array.len().unwrap(), 3);
//! assert_eq!(array.to_display_string().unwrap(), "AB\u{FFFD}");
//!
//! array.release().unwrap();
//! assert!(matches!(
//!     array.len(),
//!     Err(ByteArrayError::UseAfterRelease { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod growth;
pub mod source;

pub use buffer::ByteArray;
pub use error::{ByteArrayError, ByteArrayResult};
pub use growth::{ByteArrayOptions, GrowthStats, DEFAULT_MIN_GROWTH};
pub use source::ByteSource;
