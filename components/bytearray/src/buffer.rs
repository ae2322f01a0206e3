//! The reference-counted growable byte array.

use crate::error::{ByteArrayError, ByteArrayResult};
use crate::growth::{ByteArrayOptions, GrowthStats};
use crate::source::ByteSource;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Backing storage of a live byte array
#[derive(Debug)]
struct Store {
    data: Vec<u8>,
    options: ByteArrayOptions,
    stats: GrowthStats,
}

impl Store {
    fn extend(&mut self, bytes: &[u8]) -> ByteArrayResult<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.reserve(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    fn reserve(&mut self, additional: usize) -> ByteArrayResult<()> {
        let len = self.data.len();
        let required = len
            .checked_add(additional)
            .ok_or_else(|| ByteArrayError::AllocationFailure {
                requested: usize::MAX,
                reason: "length overflows usize".to_string(),
            })?;

        if let Some(max) = self.options.max_length {
            if required > max {
                return Err(ByteArrayError::AllocationFailure {
                    requested: required,
                    reason: format!("exceeds maximum length {}", max),
                });
            }
        }

        let capacity = self.data.capacity();
        if required <= capacity {
            return Ok(());
        }

        let target = self.options.growth_target(capacity, required);
        self.data
            .try_reserve_exact(target - len)
            .map_err(|e| ByteArrayError::AllocationFailure {
                requested: target,
                reason: e.to_string(),
            })?;
        self.stats.record(len);
        trace!(
            old_capacity = capacity,
            new_capacity = self.data.capacity(),
            len,
            "bytearray grown"
        );
        Ok(())
    }
}

/// Live/Released tag of a byte array
#[derive(Debug)]
enum State {
    Live(Store),
    Released,
}

/// A mutable, growable, reference-counted sequence of bytes.
///
/// Cloning a `ByteArray` creates another handle to the same store; the store
/// is freed when the last handle is dropped or when [`ByteArray::release`]
/// is called. After release every operation fails with
/// [`ByteArrayError::UseAfterRelease`].
///
/// Indexed writes never grow the array; only appends do.
///
/// # Examples
///
/// ```
/// use bytearray::{ByteArray, ByteSource};
///
/// let array = ByteArray::new();
/// array.append(ByteSource::from("AB")).unwrap();
/// assert_eq!(array.len().unwrap(), 2);
/// assert_eq!(array.get(0).unwrap(), 65);
///
/// array.set(1, 0x43).unwrap();
/// assert_eq!(array.to_display_string().unwrap(), "AC");
/// assert!(array.get(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteArray {
    state: Rc<RefCell<State>>,
}

impl Default for ByteArray {
    fn default() -> Self {
        ByteArray::new()
    }
}

impl ByteArray {
    /// Create an empty byte array with default options
    pub fn new() -> Self {
        ByteArray::from_store(Store {
            data: Vec::new(),
            options: ByteArrayOptions::default(),
            stats: GrowthStats::default(),
        })
    }

    /// Create an empty byte array with the given options.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the initial capacity cannot be reserved.
    /// The initial capacity is clamped to `max_length`.
    pub fn with_options(options: ByteArrayOptions) -> ByteArrayResult<Self> {
        let initial = match options.max_length {
            Some(max) => options.initial_capacity.min(max),
            None => options.initial_capacity,
        };
        let mut data = Vec::new();
        data.try_reserve_exact(initial)
            .map_err(|e| ByteArrayError::AllocationFailure {
                requested: initial,
                reason: e.to_string(),
            })?;
        debug!(
            initial_capacity = initial,
            max_length = ?options.max_length,
            "bytearray created"
        );
        Ok(ByteArray::from_store(Store {
            data,
            options,
            stats: GrowthStats::default(),
        }))
    }

    fn from_store(store: Store) -> Self {
        ByteArray {
            state: Rc::new(RefCell::new(State::Live(store))),
        }
    }

    fn with_live<R>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&Store) -> ByteArrayResult<R>,
    ) -> ByteArrayResult<R> {
        match &*self.state.borrow() {
            State::Live(store) => f(store),
            State::Released => Err(ByteArrayError::UseAfterRelease { operation }),
        }
    }

    fn with_live_mut<R>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Store) -> ByteArrayResult<R>,
    ) -> ByteArrayResult<R> {
        match &mut *self.state.borrow_mut() {
            State::Live(store) => f(store),
            State::Released => Err(ByteArrayError::UseAfterRelease { operation }),
        }
    }

    /// Number of valid bytes
    pub fn len(&self) -> ByteArrayResult<usize> {
        self.with_live("len", |store| Ok(store.data.len()))
    }

    /// Whether the byte array holds no bytes
    pub fn is_empty(&self) -> ByteArrayResult<bool> {
        self.with_live("is_empty", |store| Ok(store.data.is_empty()))
    }

    /// Allocated capacity of the store
    pub fn capacity(&self) -> ByteArrayResult<usize> {
        self.with_live("capacity", |store| Ok(store.data.capacity()))
    }

    /// Reallocation counters of the store
    pub fn growth_stats(&self) -> ByteArrayResult<GrowthStats> {
        self.with_live("growth_stats", |store| Ok(store.stats))
    }

    /// Options the store was created with
    pub fn options(&self) -> ByteArrayResult<ByteArrayOptions> {
        self.with_live("options", |store| Ok(store.options))
    }

    /// Read the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `0 <= index < len`.
    pub fn get(&self, index: i64) -> ByteArrayResult<u8> {
        self.with_live("get", |store| {
            let i = checked_index(index, store.data.len())?;
            Ok(store.data[i])
        })
    }

    /// Overwrite the byte at `index` with the low 8 bits of `value`.
    ///
    /// Never grows the byte array.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `0 <= index < len`.
    pub fn set(&self, index: i64, value: i64) -> ByteArrayResult<()> {
        self.with_live_mut("set", |store| {
            let i = checked_index(index, store.data.len())?;
            store.data[i] = value as u8;
            Ok(())
        })
    }

    /// Append the bytes of `source` at the end and return this handle.
    ///
    /// Empty sources leave the byte array untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the source cannot provide bytes
    /// - `Unsupported` for [`ByteSource::Buffer`]
    /// - `AllocationFailure` if the store cannot grow
    pub fn append(&self, source: ByteSource<'_>) -> ByteArrayResult<&Self> {
        self.with_live_mut("append", |store| {
            let bytes = source.bytes()?;
            store.extend(bytes)
        })?;
        Ok(self)
    }

    /// Append a copy of `other`'s current bytes and return this handle.
    ///
    /// Later changes to either array do not affect the other. Appending an
    /// array to itself doubles its contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytearray::{ByteArray, ByteSource};
    ///
    /// let a = ByteArray::new();
    /// a.append(ByteSource::from("ab")).unwrap();
    /// a.append_copy_of(&a.clone()).unwrap();
    /// assert_eq!(a.to_vec().unwrap(), b"abab");
    /// ```
    pub fn append_copy_of(&self, other: &ByteArray) -> ByteArrayResult<&Self> {
        if self.ptr_eq(other) {
            self.with_live_mut("append_copy_of", |store| {
                let snapshot = store.data.clone();
                store.extend(&snapshot)
            })?;
            return Ok(self);
        }

        other.with_live("append_copy_of", |source| {
            self.with_live_mut("append_copy_of", |store| store.extend(&source.data))
        })?;
        Ok(self)
    }

    /// Render the bytes as text, replacing invalid UTF-8 with U+FFFD
    pub fn to_display_string(&self) -> ByteArrayResult<String> {
        self.with_live("tostring", |store| {
            Ok(String::from_utf8_lossy(&store.data).into_owned())
        })
    }

    /// Copy of the valid bytes
    pub fn to_vec(&self) -> ByteArrayResult<Vec<u8>> {
        self.with_live("to_vec", |store| Ok(store.data.clone()))
    }

    /// Free the store and mark every handle to it as released.
    ///
    /// # Errors
    ///
    /// Returns `UseAfterRelease` if the store was already released.
    pub fn release(&self) -> ByteArrayResult<()> {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), State::Released);
        match previous {
            State::Live(store) => {
                debug!(
                    len = store.data.len(),
                    reallocations = store.stats.reallocations,
                    "bytearray released"
                );
                Ok(())
            }
            State::Released => Err(ByteArrayError::UseAfterRelease {
                operation: "release",
            }),
        }
    }

    /// Whether the store has been released
    pub fn is_released(&self) -> bool {
        matches!(&*self.state.borrow(), State::Released)
    }

    /// Whether both handles share one store
    pub fn ptr_eq(&self, other: &ByteArray) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Number of handles sharing this store
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.state)
    }
}

fn checked_index(index: i64, len: usize) -> ByteArrayResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(ByteArrayError::OutOfRange { index, len })
}
