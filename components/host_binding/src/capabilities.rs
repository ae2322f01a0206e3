//! Capability table of the `bytearray` host type.
//!
//! Non-numeric keys used to index a byte array are looked up here, the way a
//! metatable answers method lookups.

use std::collections::HashMap;

/// An operation reachable by name on a byte array value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Length query (`#b`)
    Len,
    /// Display conversion
    ToString,
    /// Numeric read or capability lookup
    Index,
    /// Numeric write
    NewIndex,
    /// Concatenation operator, appends in place
    Concat,
    /// Append a string or byte blob
    Append,
    /// Append a copy of another byte array
    AppendByteArray,
    /// Release the store
    Release,
}

impl Capability {
    /// Arguments expected after the receiver
    pub fn arity(&self) -> usize {
        match self {
            Capability::Len | Capability::ToString | Capability::Release => 0,
            Capability::Index
            | Capability::Concat
            | Capability::Append
            | Capability::AppendByteArray => 1,
            Capability::NewIndex => 2,
        }
    }
}

/// Names under which capabilities are registered
const REGISTRY: &[(&str, Capability)] = &[
    ("__len", Capability::Len),
    ("__tostring", Capability::ToString),
    ("__index", Capability::Index),
    ("__newindex", Capability::NewIndex),
    ("__concat", Capability::Concat),
    ("__gc", Capability::Release),
    ("append", Capability::Append),
    ("append_bytearray", Capability::AppendByteArray),
    ("len", Capability::Len),
    ("tostring", Capability::ToString),
    ("release", Capability::Release),
];

/// Name to capability lookup table.
///
/// # Examples
///
/// ```
/// use host_binding::{Capability, CapabilityTable};
///
/// let table = CapabilityTable::new();
/// assert_eq!(table.lookup("append"), Some(Capability::Append));
/// assert_eq!(table.lookup("__len"), Some(Capability::Len));
/// assert_eq!(table.lookup("push"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    entries: HashMap<&'static str, Capability>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityTable {
    /// Build the table with every registered capability
    pub fn new() -> Self {
        CapabilityTable {
            entries: REGISTRY.iter().copied().collect(),
        }
    }

    /// Find the capability registered under `name`
    pub fn lookup(&self, name: &str) -> Option<Capability> {
        self.entries.get(name).copied()
    }

    /// Registered name for `name`, with static lifetime
    pub fn registered_name(&self, name: &str) -> Option<&'static str> {
        self.entries.get_key_value(name).map(|(k, _)| *k)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
