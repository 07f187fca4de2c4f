//! Value types for typetour
//!
//! This module defines:
//! - Value: Unified enum for heterogeneous collection elements
//!
//! A growable collection normally holds one element kind. The untyped
//! dynamic collection demonstration needs elements of different kinds
//! in the same collection, so those demonstrations store `Value`
//! instead of a concrete element type.
//!
//! ## Type Rules
//!
//! - No implicit coercions: `Int(1) != Uint(1)` even though the
//!   payloads print the same way
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified value type for heterogeneous collections
///
/// Different variants are never equal, even when they hold the same
/// "value": `Int(24) != Uint(24)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit unsigned integer
    Uint(u64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// Single Unicode scalar value
    Char(char),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Uint(_) => "Uint",
            Value::Float(_) => "Float",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
        }
    }
}

// Display renders the payload alone, the way narration lines quote it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}
