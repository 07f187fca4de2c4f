//! Strings: immutable character sequences, escapes, raw literals
//!
//! A string is a sequence of characters, immutable once constructed.
//! Characters that already have a job inside a literal (the quote,
//! the backslash) are written with a backslash escape; a raw literal
//! turns escape processing off entirely, which is what makes
//! backslash-heavy text such as a Windows path readable. Both forms
//! must render the identical character sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetour_core::Transcript;

/// A Windows path written with escaped backslashes
pub const ESCAPED_PATH: &str = "C:\\Users\\Josh\\Documents\\fileName.exe";

/// The same path written as a raw literal
pub const RAW_PATH: &str = r"C:\Users\Josh\Documents\fileName.exe";

/// Escape sequences a string literal understands, paired with the
/// character each one produces
pub const ESCAPES: [(&str, char); 7] = [
    ("\\'", '\''),
    ("\\\"", '"'),
    ("\\\\", '\\'),
    ("\\0", '\0'),
    ("\\n", '\n'),
    ("\\r", '\r'),
    ("\\t", '\t'),
];

/// Evidence for string construction, escaping, and the raw-literal
/// round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringReport {
    /// A plain string sample
    pub name: String,
    /// A sample containing escaped quote and backslash characters
    pub with_escapes: String,
    /// The escaped path rendering
    pub escaped_path: String,
    /// The raw-literal path rendering
    pub raw_path: String,
    /// Narration
    pub transcript: Transcript,
}

/// Build the string samples and show escaped and raw literals render
/// the same characters
pub fn string_report() -> StringReport {
    let name = "Joshua Tucker".to_string();
    let with_escapes = "Here is a string with a \" inside of it by using the \\".to_string();
    let escaped_path = ESCAPED_PATH.to_string();
    let raw_path = RAW_PATH.to_string();
    debug!(name = %name, paths_match = escaped_path == raw_path, "string samples");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "A string saves a sequence of characters, such as the name {name}, for reuse."
    ));
    transcript.line(with_escapes.clone());
    transcript.line(format!(
        "Both {escaped_path} and {raw_path} output the same value; the raw literal is just easier to read."
    ));
    StringReport {
        name,
        with_escapes,
        escaped_path,
        raw_path,
        transcript,
    }
}
