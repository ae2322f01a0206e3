//! Finalization hook for byte array handles.

use bytearray::ByteArray;
use tracing::{trace, warn};

/// Releases one byte array exactly once.
///
/// The hook unlinks itself when it runs: later calls, and the drop of the
/// hook itself, do nothing.
///
/// # Examples
///
/// ```
/// use bytearray::ByteArray;
/// use host_binding::Finalizer;
///
/// let array = ByteArray::new();
/// let mut finalizer = Finalizer::new(array.clone());
///
/// assert!(finalizer.finalize());
/// assert!(array.is_released());
/// assert!(!finalizer.finalize());
/// ```
#[derive(Debug)]
pub struct Finalizer {
    target: Option<ByteArray>,
}

impl Finalizer {
    /// Arm a finalizer for `array`
    pub fn new(array: ByteArray) -> Self {
        Finalizer {
            target: Some(array),
        }
    }

    /// Whether the hook has not run yet
    pub fn is_armed(&self) -> bool {
        self.target.is_some()
    }

    /// Unlink the hook without releasing, handing back its target.
    ///
    /// Used when the host released the array explicitly.
    pub fn disarm(&mut self) -> Option<ByteArray> {
        self.target.take()
    }

    /// Run the hook. Returns `false` if it had already run.
    pub fn finalize(&mut self) -> bool {
        let Some(array) = self.target.take() else {
            return false;
        };
        if let Err(err) = array.release() {
            // Released elsewhere through an alias; nothing left to free.
            warn!(error = %err, "bytearray finalized after release");
        } else {
            trace!("bytearray finalized");
        }
        true
    }
}

impl Drop for Finalizer {
    fn drop(&mut self) {
        self.finalize();
    }
}
