//! Core host value types and error handling.
//!
//! This crate provides the foundational types shared by native modules and
//! the host binding layer: value representation, the foreign-value
//! capability interface, and host-facing errors.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of host values
//! - [`ForeignValue`] - Capability interface for values owned by the host
//! - [`HostError`] - Errors raised to the host
//! - [`ErrorKind`] - Classes of host errors
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, HostError, StaticBytes, Value};
//!
//! let text = Value::string("AB");
//! assert_eq!(text.as_bytes(), Some(&b"AB"[..]));
//!
//! let blob = Value::foreign(StaticBytes::new(vec![0xde, 0xad]));
//! assert_eq!(blob.type_name(), "GLib.Bytes");
//!
//! let error = HostError::range_error("index out of range");
//! assert_eq!(error.kind, ErrorKind::RangeError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod foreign;
mod value;

pub use error::{ErrorKind, HostError, HostResult};
pub use foreign::{ForeignValue, OpaqueForeign, StaticBytes};
pub use value::Value;
