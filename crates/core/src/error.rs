//! Error types for the typetour demonstrations
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every variant here describes a container fault that the contracts
//! make possible but no demonstration exercises: the demonstrations
//! only ever use pre-validated boundary values and keys they inserted
//! themselves. A fault is fatal to its demonstration and propagates to
//! the invoking test runner; nothing catches or retries.

use thiserror::Error;

/// Result type alias for typetour operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for container demonstrations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Index past the end of a fixed-capacity array or list
    #[error("index {index} out of bounds for capacity {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Capacity of the container
        len: usize,
    },

    /// Insert of a key that already exists in a unique-key mapping
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Lookup of a key that was never inserted
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Removal from a container that has no elements left
    #[error("container is empty: {0}")]
    Empty(&'static str),

    /// Literal that does not parse as a value of its declared kind
    #[error("invalid literal for {kind}: {literal}")]
    InvalidLiteral {
        /// Name of the numeric kind the literal was declared as
        kind: &'static str,
        /// The offending literal text
        literal: String,
    },
}
