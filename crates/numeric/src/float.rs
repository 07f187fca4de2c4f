//! Decimal-capable kinds and storage-induced rounding
//!
//! This module defines:
//! - FloatClass: the three precision classes (32-bit binary, 64-bit
//!   binary, 128-bit base-10)
//! - PrecisionSample: a literal paired with what a store of it yields
//! - store / float_report: the precision-loss demonstration
//!
//! ## Precision Rules
//!
//! - `Single` (f32): IEEE-754 binary32, ~7 significant decimal
//!   digits. The stored rendering is rounded to exactly 7.
//! - `Double` (f64): IEEE-754 binary64, ~15-16 significant decimal
//!   digits. The stored rendering is the shortest round-trip form.
//! - `Decimal` (128-bit base-10 fixed point via `rust_decimal`):
//!   28-29 significant digits, exact decimal arithmetic for values
//!   such as money, not a binary approximation.
//!
//! The canonical demonstration literal carries 30 fractional digits,
//! more than any of the three classes can hold, so every store
//! exhibits its class's rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use typetour_core::{Error, Result, Transcript};

/// The demonstration literal: pi to 30 decimal places
pub const PI_LITERAL: &str = "3.141592653589793238462643383279";

/// Precision class of a decimal-capable numeric kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatClass {
    /// 32-bit IEEE-754 binary floating point (f32)
    Single,
    /// 64-bit IEEE-754 binary floating point (f64)
    Double,
    /// 128-bit base-10 fixed point (rust_decimal::Decimal)
    Decimal,
}

impl FloatClass {
    /// Kind name as written in source
    pub fn name(&self) -> &'static str {
        match self {
            FloatClass::Single => "f32",
            FloatClass::Double => "f64",
            FloatClass::Decimal => "Decimal",
        }
    }

    /// Bit width of the encoding
    pub fn bits(&self) -> u32 {
        match self {
            FloatClass::Single => 32,
            FloatClass::Double => 64,
            FloatClass::Decimal => 128,
        }
    }

    /// Significant decimal digits the class is guaranteed to hold
    pub fn significant_digits(&self) -> u32 {
        match self {
            FloatClass::Single => 7,
            FloatClass::Double => 15,
            FloatClass::Decimal => 28,
        }
    }
}

impl fmt::Display for FloatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decimal literal and the value a store of it actually yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionSample {
    /// Precision class the literal was stored into
    pub class: FloatClass,
    /// Literal text as written in source
    pub literal: String,
    /// Rendering of the value after storage-induced rounding
    pub stored: String,
}

impl fmt::Display for PrecisionSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stored as {} rounds to {}.",
            self.literal, self.class, self.stored
        )
    }
}

/// Store a decimal literal into the given class and record the
/// rounding the store applies
///
/// # Errors
/// Returns [`Error::InvalidLiteral`] if the text does not parse as a
/// value of the class. Demonstrations never hit this: they only use
/// pre-validated literals.
pub fn store(class: FloatClass, literal: &str) -> Result<PrecisionSample> {
    let invalid = || Error::InvalidLiteral {
        kind: class.name(),
        literal: literal.to_string(),
    };
    let stored = match class {
        FloatClass::Single => {
            let value: f32 = literal.parse().map_err(|_| invalid())?;
            round_to_significant(f64::from(value), 7)
        }
        FloatClass::Double => {
            let value: f64 = literal.parse().map_err(|_| invalid())?;
            value.to_string()
        }
        FloatClass::Decimal => {
            let value: Decimal = literal.parse().map_err(|_| invalid())?;
            value.to_string()
        }
    };
    debug!(class = %class, literal, stored = %stored, "stored literal");
    Ok(PrecisionSample {
        class,
        literal: literal.to_string(),
        stored,
    })
}

/// Render `value` rounded to `digits` significant decimal digits
fn round_to_significant(value: f64, digits: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

/// Count significant decimal digits in a rendered number
///
/// Ignores the sign, the decimal point, and leading zeros.
pub fn significant_digits_of(rendered: &str) -> u32 {
    rendered
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count() as u32
}

/// Report over every precision class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatReport {
    /// One sample per class: Single, Double, Decimal
    pub samples: Vec<PrecisionSample>,
    /// Narration, one line per sample
    pub transcript: Transcript,
}

/// Store the canonical pi literal into every precision class and
/// narrate the rounding each one applies
pub fn float_report() -> Result<FloatReport> {
    let classes = [FloatClass::Single, FloatClass::Double, FloatClass::Decimal];
    let mut samples = Vec::with_capacity(classes.len());
    let mut transcript = Transcript::new();
    for class in classes {
        let sample = store(class, PI_LITERAL)?;
        transcript.line(sample.to_string());
        samples.push(sample);
    }
    Ok(FloatReport {
        samples,
        transcript,
    })
}
