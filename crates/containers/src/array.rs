//! Fixed indexed array: capacity set at creation, never grows
//!
//! The array preserves insertion order and supports index get/set.
//! An out-of-range index is an error condition; the demonstration
//! never triggers it, but the checked accessors make the contract
//! explicit.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetour_core::{Error, Result, Transcript};

/// Capacity of the demonstration array, fixed at creation
pub const FIXED_CAPACITY: usize = 5;

/// Set `slots[index]`, refusing indexes past the capacity
pub fn checked_set(slots: &mut [String], index: usize, value: impl Into<String>) -> Result<()> {
    let len = slots.len();
    let slot = slots.get_mut(index).ok_or(Error::IndexOutOfBounds { index, len })?;
    *slot = value.into();
    Ok(())
}

/// Get `slots[index]`, refusing indexes past the capacity
pub fn checked_get(slots: &[String], index: usize) -> Result<&String> {
    slots.get(index).ok_or(Error::IndexOutOfBounds {
        index,
        len: slots.len(),
    })
}

/// Evidence that a fixed array round-trips an indexed set/get while
/// its capacity stays put
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayReport {
    /// Declared capacity, before any operation
    pub capacity_before: usize,
    /// Capacity after the set/get transaction
    pub capacity_after: usize,
    /// Value read back from index 0
    pub first: String,
    /// Narration
    pub transcript: Transcript,
}

/// Create a five-slot array, set index 0, and read it back
pub fn array_report() -> Result<ArrayReport> {
    let mut slots: [String; FIXED_CAPACITY] = Default::default();
    let capacity_before = slots.len();

    checked_set(&mut slots, 0, "Hello world")?;
    let first = checked_get(&slots, 0)?.clone();
    let capacity_after = slots.len();
    debug!(capacity = capacity_after, first = %first, "array transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!(
        "An array holds a fixed number of slots ({capacity_before} here) decided at creation."
    ));
    transcript.line(format!("The first value in the array is: {first}."));
    Ok(ArrayReport {
        capacity_before,
        capacity_after,
        first,
        transcript,
    })
}
