//! Integration test suite for the bytearray workspace
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries: host values through
//! the binding into the engine, and shell scripts through all three.

/// Re-export components for test convenience
pub mod components {
    pub use bytearray;
    pub use bytearray_cli;
    pub use core_types;
    pub use host_binding;
}
