//! Byte array shell library
//!
//! Provides the Runtime struct and supporting modules for the
//! `bytearray-shell` binary: argument parsing, the command language,
//! configuration loading, logging setup and the REPL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use command::{Command, Operand};
pub use error::{CliError, CliResult};
pub use runtime::Runtime;
