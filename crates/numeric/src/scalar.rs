//! Boolean and character demonstrations
//!
//! Booleans have exactly two inhabitants, and any comparison produces
//! one of them: the report derives `true` and `false` from an
//! equality and an inequality over the same integer. Characters are
//! single Unicode scalar values; a letter, a digit, a symbol, and a
//! space are equally valid samples.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetour_core::Transcript;

/// The age every boolean demonstration compares against
const AGE: i32 = 24;

/// Booleans derived from comparisons over one integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanReport {
    /// The stored integer under comparison
    pub age: i32,
    /// Result of `24 == age`
    pub is_age: bool,
    /// Result of `24 != age`
    pub is_not_age: bool,
    /// Narration
    pub transcript: Transcript,
}

/// Derive both boolean inhabitants from comparisons
pub fn boolean_report() -> BooleanReport {
    let age = AGE;
    let is_age = 24 == age;
    let is_not_age = 24 != age;
    debug!(age, is_age, is_not_age, "boolean comparison");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "A bool can be set to {} as well as {}.",
        true, false
    ));
    transcript.line(format!(
        "Stating the age is {age} evaluates to {is_age}; stating it is not {age} evaluates to {is_not_age}."
    ));
    BooleanReport {
        age,
        is_age,
        is_not_age,
        transcript,
    }
}

/// Single-character samples, one per character category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReport {
    /// A letter
    pub letter: char,
    /// A digit
    pub digit: char,
    /// A symbol
    pub symbol: char,
    /// A space
    pub space: char,
    /// Narration
    pub transcript: Transcript,
}

/// Show that any Unicode scalar fits in a single char
pub fn character_report() -> CharacterReport {
    let letter = 'C';
    let digit = '1';
    let symbol = '$';
    let space = ' ';
    debug!(%letter, %digit, %symbol, "character samples");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "A char holds a single character such as {letter}, {digit}, {symbol}, and even the '{space}' from a spacebar."
    ));
    CharacterReport {
        letter,
        digit,
        symbol,
        space,
        transcript,
    }
}
