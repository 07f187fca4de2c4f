//! Integer kinds and their representable ranges
//!
//! This module defines:
//! - Signedness: whether a kind spends a bit on sign
//! - IntRange: one integer kind with its exact bounds
//! - integer_ranges / integer_report: enumeration of all eight kinds
//!
//! ## Range Rules
//!
//! Bounds come straight from the std types (`u8::MIN`, `i64::MAX`,
//! ...) and must agree with the encoding formulas:
//! - unsigned width W: [0, 2^W - 1]
//! - signed width W (two's-complement): [-2^(W-1), 2^(W-1) - 1]
//!
//! `i128` holds every bound including `u64::MAX`, so one field type
//! covers all eight kinds. No overflow handling is demonstrated: the
//! reporter only ever assigns in-range boundary values.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use typetour_core::Transcript;

/// Whether an integer kind can represent negative values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signedness {
    /// Range starts at 0
    Unsigned,
    /// Range is spread around 0 (two's-complement)
    Signed,
}

/// One built-in integer kind with its exact representable bounds
///
/// Serialize-only: `name` borrows the kind's source spelling for the
/// life of the program, which deserialization could not reproduce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntRange {
    /// Kind name as written in source ("u8", "i64", ...)
    pub name: &'static str,
    /// Bit width of the encoding
    pub bits: u32,
    /// Signed or unsigned
    pub signedness: Signedness,
    /// Smallest representable value
    pub min: i128,
    /// Largest representable value
    pub max: i128,
}

impl IntRange {
    fn new(name: &'static str, bits: u32, signedness: Signedness, min: i128, max: i128) -> Self {
        Self {
            name,
            bits,
            signedness,
            min,
            max,
        }
    }

    /// Number of distinct representable values (2^W)
    pub fn cardinality(&self) -> u128 {
        1u128 << self.bits
    }

    /// True if min/max agree with the encoding formula for this
    /// width and signedness
    pub fn matches_encoding_formula(&self) -> bool {
        match self.signedness {
            Signedness::Unsigned => self.min == 0 && self.max == (1i128 << self.bits) - 1,
            Signedness::Signed => {
                self.min == -(1i128 << (self.bits - 1))
                    && self.max == (1i128 << (self.bits - 1)) - 1
            }
        }
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qualifier = match self.signedness {
            Signedness::Unsigned => "unsigned",
            Signedness::Signed => "signed",
        };
        write!(
            f,
            "A {} ranges from {} to {} ({}-bit, {}).",
            self.name, self.min, self.max, self.bits, qualifier
        )
    }
}

/// All eight built-in integer kinds, narrowest first, unsigned before
/// signed at each width
pub fn integer_ranges() -> Vec<IntRange> {
    use Signedness::{Signed, Unsigned};
    vec![
        IntRange::new("u8", 8, Unsigned, u8::MIN as i128, u8::MAX as i128),
        IntRange::new("i8", 8, Signed, i8::MIN as i128, i8::MAX as i128),
        IntRange::new("u16", 16, Unsigned, u16::MIN as i128, u16::MAX as i128),
        IntRange::new("i16", 16, Signed, i16::MIN as i128, i16::MAX as i128),
        IntRange::new("u32", 32, Unsigned, u32::MIN as i128, u32::MAX as i128),
        IntRange::new("i32", 32, Signed, i32::MIN as i128, i32::MAX as i128),
        IntRange::new("u64", 64, Unsigned, u64::MIN as i128, u64::MAX as i128),
        IntRange::new("i64", 64, Signed, i64::MIN as i128, i64::MAX as i128),
    ]
}

/// Report over every integer kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerReport {
    /// One entry per kind, in `integer_ranges()` order
    pub ranges: Vec<IntRange>,
    /// Narration, one line per kind
    pub transcript: Transcript,
}

/// Enumerate every integer kind and narrate its bounds
pub fn integer_report() -> IntegerReport {
    let ranges = integer_ranges();
    let mut transcript = Transcript::new();
    for range in &ranges {
        debug!(kind = range.name, min = %range.min, max = %range.max, "integer range");
        transcript.line(range.to_string());
    }
    IntegerReport { ranges, transcript }
}
