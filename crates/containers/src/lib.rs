//! Container semantics reporter
//!
//! One module per container abstraction, each demonstrating the
//! defining guarantee of its ordering/uniqueness contract with a
//! single representative transaction:
//! - array: fixed-capacity indexed storage (capacity never grows)
//! - list: growable indexed storage, plus the heterogeneous
//!   collection that mixes element kinds via [`Value`]
//! - queue: strict first-in-first-out removal
//! - stack: strict last-in-first-out removal
//! - map: unique-key mapping with duplicate-rejecting insert
//! - set: duplicate-free membership where re-insertion is a no-op
//! - text: strings as immutable character sequences, escape
//!   sequences, and raw literals
//!
//! No container is built from scratch; every demonstration drives a
//! std collection through thin checked accessors so the error
//! contracts (out-of-range index, duplicate key, empty removal) are
//! explicit even though no demonstration triggers them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod list;
pub mod map;
pub mod queue;
pub mod set;
pub mod stack;
pub mod text;

pub use array::{array_report, ArrayReport, FIXED_CAPACITY};
pub use list::{dynamic_report, list_report, DynamicReport, ListReport};
pub use map::{map_report, MapReport};
pub use queue::{queue_report, QueueReport};
pub use set::{set_report, SetReport};
pub use stack::{stack_report, StackReport};
pub use text::{string_report, StringReport, ESCAPED_PATH, RAW_PATH};

pub use typetour_core::{Transcript, Value};
