//! Growable indexed list and the heterogeneous collection
//!
//! A list preserves insertion order like an array but grows without
//! explicit resize calls. The heterogeneous variant stores
//! [`Value`] elements, so one collection can mix element kinds the
//! way an untyped dynamic collection does.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetour_core::{Error, Result, Transcript, Value};

/// Evidence that a list grows on append and stays index-addressable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListReport {
    /// Length before any append
    pub len_before: usize,
    /// Length after the appends
    pub len_after: usize,
    /// Value read back from index 1
    pub second: String,
    /// Narration
    pub transcript: Transcript,
}

/// Append two values to an empty list and read back the second
pub fn list_report() -> Result<ListReport> {
    let mut list: Vec<String> = Vec::new();
    let len_before = list.len();

    list.push("Joshua".to_string());
    list.push("Ransford".to_string());
    let second = list
        .get(1)
        .cloned()
        .ok_or(Error::IndexOutOfBounds { index: 1, len: 0 })?;
    let len_after = list.len();
    debug!(len_before, len_after, second = %second, "list transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "A list grew from {len_before} to {len_after} items with no explicit resize."
    ));
    transcript.line(format!("The item in the list with index 1 is: {second}."));
    Ok(ListReport {
        len_before,
        len_after,
        second,
        transcript,
    })
}

/// Evidence that one collection can hold elements of differing kinds
///
/// Serialize-only: `kinds` borrows the static kind names, which
/// deserialization could not reproduce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicReport {
    /// Value read back from index 0
    pub first: Value,
    /// Kind of every element, in insertion order
    pub kinds: Vec<&'static str>,
    /// Narration
    pub transcript: Transcript,
}

/// Mix an integer and a string in one collection
pub fn dynamic_report() -> Result<DynamicReport> {
    let collection = vec![Value::Int(24), Value::from("Joshua")];

    let first = collection
        .first()
        .cloned()
        .ok_or(Error::Empty("dynamic collection"))?;
    let kinds: Vec<_> = collection.iter().map(Value::type_name).collect();
    debug!(first = %first, ?kinds, "dynamic collection transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "One dynamic collection holds a {} and a {} side by side.",
        kinds[0], kinds[1]
    ));
    transcript.line(format!("The first value in the collection is: {first}."));
    Ok(DynamicReport {
        first,
        kinds,
        transcript,
    })
}
