//! Numeric range and precision reporter
//!
//! This crate enumerates the built-in numeric kinds and reports the
//! semantics their encodings guarantee:
//! - int: the eight integer kinds (widths 8/16/32/64, signed and
//!   unsigned) with their exact representable bounds
//! - float: the three decimal-capable kinds (32-bit binary, 64-bit
//!   binary, 128-bit base-10) and the rounding a store applies
//! - scalar: boolean derivation from comparisons, and single
//!   Unicode characters
//!
//! Each reporter is a zero-argument function returning a typed report
//! with the sampled values plus a [`Transcript`] of narration lines.
//! Reports are deterministic: the same reporter always produces the
//! same transcript.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod float;
pub mod int;
pub mod scalar;

pub use float::{
    float_report, significant_digits_of, store, FloatClass, FloatReport, PrecisionSample,
    PI_LITERAL,
};
pub use int::{integer_report, integer_ranges, IntRange, IntegerReport, Signedness};
pub use scalar::{boolean_report, character_report, BooleanReport, CharacterReport};

pub use typetour_core::Transcript;
