//! Unique-key mapping: insert(key, value) and lookup(key)
//!
//! Keys are unique. Inserting a duplicate key and looking up a key
//! that was never inserted are both error conditions; the
//! demonstration exercises neither, but the checked accessors carry
//! the contract. No iteration-order guarantee exists or is relied
//! on: the demonstration only ever looks up by key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use typetour_core::{Error, Result, Transcript};

/// Insert a key/value pair, refusing keys already present
pub fn insert_unique(map: &mut HashMap<u32, String>, key: u32, value: impl Into<String>) -> Result<()> {
    if map.contains_key(&key) {
        return Err(Error::DuplicateKey(key.to_string()));
    }
    map.insert(key, value.into());
    Ok(())
}

/// Look up a key, refusing keys that were never inserted
pub fn lookup(map: &HashMap<u32, String>, key: u32) -> Result<&String> {
    map.get(&key)
        .ok_or_else(|| Error::KeyNotFound(key.to_string()))
}

/// Evidence that lookup returns the value inserted under the key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapReport {
    /// Key the demonstration looks up
    pub key: u32,
    /// Value found under that key
    pub value: String,
    /// Number of entries after the inserts
    pub len: usize,
    /// Narration
    pub transcript: Transcript,
}

/// Insert three entries and look one up by key
pub fn map_report() -> Result<MapReport> {
    let mut map = HashMap::new();
    insert_unique(&mut map, 1, "Joshua")?;
    insert_unique(&mut map, 37, "Lawrence")?;
    insert_unique(&mut map, 42, "Ransford")?;

    let key = 37;
    let value = lookup(&map, key)?.clone();
    let len = map.len();
    debug!(key, value = %value, len, "map transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "The entry in the map with the key {key} has the value: {value}."
    ));
    Ok(MapReport {
        key,
        value,
        len,
        transcript,
    })
}
