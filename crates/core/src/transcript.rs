//! Transcript: ordered narration produced by a demonstration
//!
//! Every reporter returns its evidence as typed fields plus a
//! `Transcript` of human-readable lines. The transcript is what a
//! demonstration prints to stdout; the typed fields are what its
//! tests assert on.
//!
//! Demonstrations are deterministic and independent, so running the
//! same reporter twice yields byte-identical transcripts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Append-only sequence of narration lines
///
/// Iteration order is append order. There is no way to remove or
/// reorder lines once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one narration line
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// All lines, in append order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines recorded so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if no line has been recorded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Extend<String> for Transcript {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}
