//! Duplicate-free set: re-inserting a member is a silent no-op
//!
//! The size only grows on genuinely new values. No iteration-order
//! guarantee exists or is relied on: the demonstration only ever
//! checks membership and size.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use typetour_core::Transcript;

/// Evidence that a repeated insert does not grow the set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetReport {
    /// Whether the first insert added a new member
    pub first_insert_added: bool,
    /// Whether the repeat insert added a new member
    pub repeat_insert_added: bool,
    /// Final number of members
    pub len: usize,
    /// Narration
    pub transcript: Transcript,
}

/// Insert the same value twice and count the members
pub fn set_report() -> SetReport {
    let mut set = HashSet::new();
    let first_insert_added = set.insert("Jordan".to_string());
    let repeat_insert_added = set.insert("Jordan".to_string());
    let len = set.len();
    debug!(first_insert_added, repeat_insert_added, len, "set transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!("There are {len} item(s) in the set."));
    SetReport {
        first_insert_added,
        repeat_insert_added,
        len,
        transcript,
    }
}
