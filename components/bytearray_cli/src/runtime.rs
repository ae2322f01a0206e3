//! Shell session state and command execution
//!
//! The Runtime owns one `bytearray` module and the byte array the session
//! is working on. Every command goes through the module's host entry
//! points, so the shell sees exactly the errors a script host would.

use crate::command::{parse_script, Command, Operand};
use crate::error::{CliError, CliResult};
use bytearray::{ByteArray, ByteArrayOptions, ByteArrayResult};
use core_types::{OpaqueForeign, StaticBytes, Value};
use host_binding::convert::{as_bytearray, check_bytearray, host_error};
use host_binding::{ByteArrayModule, Finalizer};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// The session's current byte array and its finalization hook
struct Current {
    value: Value,
    finalizer: Finalizer,
}

/// Executes shell commands against one byte array at a time
pub struct Runtime {
    module: ByteArrayModule,
    current: Option<Current>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Create a runtime with default byte array options
    ///
    /// # Example
    /// ```
    /// use bytearray_cli::Runtime;
    /// use core_types::Value;
    ///
    /// let mut runtime = Runtime::new();
    /// let results = runtime.execute_string("append \"AB\"; len").unwrap();
    /// assert_eq!(results[1], Value::Integer(2));
    /// ```
    pub fn new() -> Self {
        Self {
            module: ByteArrayModule::open(),
            current: None,
        }
    }

    /// Use `options` for every byte array created from now on
    pub fn with_options(mut self, options: ByteArrayOptions) -> Self {
        self.module = ByteArrayModule::with_options(options);
        self
    }

    /// Options used for new byte arrays
    pub fn options(&self) -> ByteArrayOptions {
        self.module.options()
    }

    /// The current byte array, if one was created
    pub fn current(&self) -> Option<&Value> {
        self.current.as_ref().map(|current| &current.value)
    }

    /// Run a script file, writing each non-nil result to `out`
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, does not parse, or a
    /// command fails
    pub fn run_file(&mut self, path: &str, out: &mut dyn Write) -> CliResult<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            CliError::IoError(io::Error::new(
                e.kind(),
                format!("could not read '{}': {}", path, e),
            ))
        })?;
        self.run_script(&source, out)
    }

    /// Execute every command in `source`, returning one result per command.
    ///
    /// The whole script is parsed before anything runs; execution stops at
    /// the first failing command.
    pub fn execute_string(&mut self, source: &str) -> CliResult<Vec<Value>> {
        let commands = parse_script(source)?;
        commands
            .iter()
            .map(|command| self.execute(command))
            .collect()
    }

    /// Execute `source`, writing each non-nil result to `out` as it is
    /// produced
    pub fn run_script(&mut self, source: &str, out: &mut dyn Write) -> CliResult<()> {
        for command in parse_script(source)? {
            let value = self.execute(&command)?;
            if !matches!(value, Value::Nil) {
                writeln!(out, "{}", format_value(&value))?;
            }
        }
        Ok(())
    }

    /// Execute one command. A byte array is created on first use.
    pub fn execute(&mut self, command: &Command) -> CliResult<Value> {
        let result = match command {
            Command::New => self.create()?,
            Command::Append(operand) => {
                let this = self.current_value()?;
                self.module.append(&this, &operand_value(operand, &this))?
            }
            Command::AppendByteArray(operand) => {
                let this = self.current_value()?;
                self.module
                    .append_bytearray(&this, &operand_value(operand, &this))?
            }
            Command::Concat(operand) => {
                let this = self.current_value()?;
                self.module.concat(&this, &operand_value(operand, &this))?
            }
            Command::Get(key) => {
                let this = self.current_value()?;
                self.module.index(&this, &operand_value(key, &this))?
            }
            Command::Set(key, value) => {
                let this = self.current_value()?;
                self.module.newindex(
                    &this,
                    &operand_value(key, &this),
                    &operand_value(value, &this),
                )?;
                Value::Nil
            }
            Command::Len => {
                let this = self.current_value()?;
                self.module.len(&this)?
            }
            Command::Show => {
                let this = self.current_value()?;
                self.module.tostring(&this)?
            }
            Command::Hex => {
                let bytes = check_bytearray(&self.current_value()?, "hex")?
                    .to_vec()
                    .map_err(|e| host_error(e, "hex"))?;
                Value::String(hex::encode(bytes).into_bytes())
            }
            Command::Stats => {
                let array = check_bytearray(&self.current_value()?, "stats")?;
                let report = growth_report(&array).map_err(|e| host_error(e, "stats"))?;
                Value::String(report.to_string().into_bytes())
            }
            Command::Methods => Value::string(&self.module.capabilities().names().join(" ")),
            Command::Release => {
                let this = self.current_value()?;
                self.module.release(&this)?;
                // Released explicitly; the hook must not run again.
                if let Some(current) = self.current.as_mut() {
                    current.finalizer.disarm();
                }
                Value::Nil
            }
        };
        Ok(result)
    }

    fn create(&mut self) -> CliResult<Value> {
        let value = self.module.new_array()?;
        let finalizer = self.module.finalizer(&value)?;
        // Dropping the previous array runs its finalizer.
        self.current = Some(Current {
            value: value.clone(),
            finalizer,
        });
        debug!(options = ?self.module.options(), "new bytearray");
        Ok(value)
    }

    fn current_value(&mut self) -> CliResult<Value> {
        match &self.current {
            Some(current) => Ok(current.value.clone()),
            None => self.create(),
        }
    }
}

fn operand_value(operand: &Operand, this: &Value) -> Value {
    match operand {
        Operand::Text(bytes) => Value::bytes(bytes.clone()),
        Operand::Blob(bytes) => Value::foreign(StaticBytes::new(bytes.clone())),
        Operand::Opaque(type_name) => Value::foreign(OpaqueForeign::new(type_name.clone())),
        Operand::SelfRef => this.clone(),
        Operand::Nil => Value::Nil,
        Operand::Boolean(b) => Value::Boolean(*b),
        Operand::Integer(n) => Value::Integer(*n),
        Operand::Number(n) => Value::Number(*n),
        Operand::Name(name) => Value::string(name),
    }
}

fn growth_report(array: &ByteArray) -> ByteArrayResult<serde_json::Value> {
    let growth = array.growth_stats()?;
    Ok(serde_json::json!({
        "length": array.len()?,
        "capacity": array.capacity()?,
        "reallocations": growth.reallocations,
        "bytes_copied": growth.bytes_copied,
    }))
}

/// Format a command result for display.
///
/// Strings are printed raw with invalid UTF-8 replaced; byte arrays show
/// their length.
pub fn format_value(value: &Value) -> String {
    if let Value::String(bytes) = value {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    match as_bytearray(value) {
        Some(array) => match array.len() {
            Ok(len) => format!("bytearray ({} bytes)", len),
            Err(_) => "bytearray (released)".to_string(),
        },
        None => value.to_string(),
    }
}
