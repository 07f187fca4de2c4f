//! Core types for the typetour demonstrations
//!
//! This crate defines the foundational types shared by every reporter:
//! - Value: Unified enum for heterogeneous collection elements
//! - Transcript: Ordered narration lines produced by a demonstration
//! - Error: Error type hierarchy for container faults

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod transcript;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use transcript::Transcript;
pub use value::Value;
