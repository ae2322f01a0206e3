//! The `bytearray` host module.
//!
//! Each entry point takes host values, unwraps them, runs one byte array
//! operation and wraps the result (or error) back for the host.

use crate::capabilities::{Capability, CapabilityTable};
use crate::convert::{
    check_bytearray, check_bytearray_arg, check_integer, host_error, to_value, type_name,
    with_source,
};
use crate::finalizer::Finalizer;
use bytearray::{ByteArray, ByteArrayOptions};
use core_types::{HostError, HostResult, Value};
use tracing::debug;

/// Name under which the module is registered with the host
pub const MODULE_NAME: &str = "bytearray";

/// Entry points of the `bytearray` module.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use host_binding::ByteArrayModule;
///
/// let module = ByteArrayModule::open();
/// let b = module.new_array().unwrap();
///
/// module.concat(&b, &Value::string("AB")).unwrap();
/// assert_eq!(module.len(&b).unwrap(), Value::Integer(2));
/// assert_eq!(module.index(&b, &Value::Integer(0)).unwrap(), Value::Integer(65));
///
/// // Non-numeric keys look up capabilities
/// assert_eq!(
///     module.index(&b, &Value::string("append")).unwrap(),
///     Value::NativeFunction("append".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ByteArrayModule {
    capabilities: CapabilityTable,
    options: ByteArrayOptions,
}

impl Default for ByteArrayModule {
    fn default() -> Self {
        Self::open()
    }
}

impl ByteArrayModule {
    /// Register the module with default byte array options
    pub fn open() -> Self {
        Self::with_options(ByteArrayOptions::default())
    }

    /// Register the module; every byte array it creates uses `options`
    pub fn with_options(options: ByteArrayOptions) -> Self {
        let capabilities = CapabilityTable::new();
        debug!(
            module = MODULE_NAME,
            capabilities = capabilities.len(),
            "module opened"
        );
        ByteArrayModule {
            capabilities,
            options,
        }
    }

    /// Name of the module
    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Options used for new byte arrays
    pub fn options(&self) -> ByteArrayOptions {
        self.options
    }

    /// The capability table
    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// `bytearray.new()`: a new, empty byte array
    pub fn new_array(&self) -> HostResult<Value> {
        self.new_with_options(self.options)
    }

    /// `bytearray.new()` with options other than the module's
    pub fn new_with_options(&self, options: ByteArrayOptions) -> HostResult<Value> {
        let array = ByteArray::with_options(options).map_err(|e| host_error(e, "new"))?;
        Ok(to_value(array))
    }

    /// A finalization hook for the byte array held by `this`
    pub fn finalizer(&self, this: &Value) -> HostResult<Finalizer> {
        Ok(Finalizer::new(check_bytearray(this, "__gc")?))
    }

    /// `#b`: number of bytes
    pub fn len(&self, this: &Value) -> HostResult<Value> {
        let array = check_bytearray(this, "__len")?;
        let len = array.len().map_err(|e| host_error(e, "__len"))?;
        Ok(Value::Integer(i64::try_from(len).unwrap_or(i64::MAX)))
    }

    /// `tostring(b)`: the bytes as text, invalid UTF-8 replaced
    pub fn tostring(&self, this: &Value) -> HostResult<Value> {
        let array = check_bytearray(this, "__tostring")?;
        let text = array
            .to_display_string()
            .map_err(|e| host_error(e, "__tostring"))?;
        Ok(Value::String(text.into_bytes()))
    }

    /// `b[key]`: integer keys read a byte, other keys look up a capability.
    ///
    /// Unknown capability names yield `nil`.
    pub fn index(&self, this: &Value, key: &Value) -> HostResult<Value> {
        let array = check_bytearray(this, "__index")?;
        if let Some(index) = key.as_integer() {
            return read_byte(&array, index);
        }
        let found = match key {
            Value::String(name) => std::str::from_utf8(name)
                .ok()
                .and_then(|name| self.get_capability(name)),
            _ => None,
        };
        Ok(found.unwrap_or(Value::Nil))
    }

    /// Numeric half of `__index`
    pub fn get_byte(&self, this: &Value, index: i64) -> HostResult<Value> {
        let array = check_bytearray(this, "__index")?;
        read_byte(&array, index)
    }

    /// Non-numeric half of `__index`
    pub fn get_capability(&self, name: &str) -> Option<Value> {
        self.capabilities
            .registered_name(name)
            .map(|name| Value::NativeFunction(name.to_string()))
    }

    /// `b[key] = value`: overwrite one byte; never grows the array
    pub fn newindex(&self, this: &Value, key: &Value, value: &Value) -> HostResult<()> {
        let array = check_bytearray(this, "__newindex")?;
        let index = check_integer(key, 2, "__newindex")?;
        let byte = check_integer(value, 3, "__newindex")?;
        array
            .set(index, byte)
            .map_err(|e| host_error(e, "__newindex"))
    }

    /// `b:append(source)`: append a string or byte blob, returning `b`
    pub fn append(&self, this: &Value, source: &Value) -> HostResult<Value> {
        self.append_as(this, source, "append")
    }

    /// `b .. source`: same as `append`; the left operand must be a byte array
    pub fn concat(&self, lhs: &Value, rhs: &Value) -> HostResult<Value> {
        if check_bytearray(lhs, "__concat").is_err() {
            return Err(HostError::type_error(format!(
                "attempt to concatenate a {} value with a {}",
                type_name(lhs),
                type_name(rhs)
            )));
        }
        self.append_as(lhs, rhs, "__concat")
    }

    fn append_as(&self, this: &Value, source: &Value, function: &str) -> HostResult<Value> {
        let array = check_bytearray(this, function)?;
        with_source(source, |source| array.append(source).map(|_| ()))
            .map_err(|e| host_error(e, function))?;
        Ok(this.clone())
    }

    /// `b:append_bytearray(other)`: append a copy of `other`, returning `b`
    pub fn append_bytearray(&self, this: &Value, other: &Value) -> HostResult<Value> {
        let array = check_bytearray(this, "append_bytearray")?;
        let other = check_bytearray_arg(other, 2, "append_bytearray")?;
        array
            .append_copy_of(&other)
            .map_err(|e| host_error(e, "append_bytearray"))?;
        Ok(this.clone())
    }

    /// `b:release()`: free the store now
    pub fn release(&self, this: &Value) -> HostResult<()> {
        let array = check_bytearray(this, "release")?;
        array.release().map_err(|e| host_error(e, "release"))?;
        debug!("bytearray released by host");
        Ok(())
    }

    /// Call the capability registered under `name` with `this` as receiver.
    ///
    /// Missing arguments are `nil`; extra arguments are ignored.
    pub fn call_method(&self, this: &Value, name: &str, args: &[Value]) -> HostResult<Value> {
        let capability = self.capabilities.lookup(name).ok_or_else(|| {
            HostError::type_error(format!("attempt to call a nil value (method '{}')", name))
        })?;

        let mut args = args.to_vec();
        if args.len() < capability.arity() {
            args.resize(capability.arity(), Value::Nil);
        }

        match capability {
            Capability::Len => self.len(this),
            Capability::ToString => self.tostring(this),
            Capability::Index => self.index(this, &args[0]),
            Capability::NewIndex => self.newindex(this, &args[0], &args[1]).map(|_| Value::Nil),
            Capability::Concat => self.concat(this, &args[0]),
            Capability::Append => self.append(this, &args[0]),
            Capability::AppendByteArray => self.append_bytearray(this, &args[0]),
            Capability::Release => self.release(this).map(|_| Value::Nil),
        }
    }
}

fn read_byte(array: &ByteArray, index: i64) -> HostResult<Value> {
    array
        .get(index)
        .map(|byte| Value::Integer(i64::from(byte)))
        .map_err(|e| host_error(e, "__index"))
}
