//! Host binding for the `bytearray` module
//!
//! Maps host calls onto the byte array engine:
//! - [`ByteArrayModule`]: construction, metamethod and method entry points
//! - [`CapabilityTable`]: names reachable through non-numeric indexing
//! - [`Finalizer`]: single-shot release hook for the host's collector
//! - [`convert`]: argument unwrapping and error translation
//!
//! # Example
//!
//! ```
//! use core_types::{ErrorKind, StaticBytes, Value};
//! use host_binding::ByteArrayModule;
//!
//! let module = ByteArrayModule::open();
//! let b = module.new_array().unwrap();
//!
//! module.append(&b, &Value::string("hi")).unwrap();
//! module.append(&b, &Value::foreign(StaticBytes::new(vec![b'!']))).unwrap();
//! assert_eq!(module.tostring(&b).unwrap(), Value::string("hi!"));
//!
//! let err = module.append(&b, &Value::Integer(5)).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::TypeError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod capabilities;
pub mod convert;
pub mod finalizer;
pub mod module;

pub use capabilities::{Capability, CapabilityTable};
pub use finalizer::Finalizer;
pub use module::{ByteArrayModule, MODULE_NAME};
