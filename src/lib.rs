//! typetour - guided tour of built-in value and reference type semantics
//!
//! Two reporters, no interaction between them beyond shared vocabulary:
//!
//! - **numeric**: enumerates the primitive numeric kinds (integer
//!   widths, floating-point precision classes, boolean, character)
//!   and reports their representable bounds and rounding behavior.
//! - **containers**: demonstrates the defining ordering/uniqueness
//!   guarantee of each standard container abstraction, plus string
//!   literal semantics.
//!
//! Every demonstration is a zero-argument function returning a typed
//! report with a [`Transcript`] of narration lines. The test suites
//! under `tests/` are the invocation surface; the `typetour` binary
//! prints the full tour to stdout.

pub use typetour_containers as containers;
pub use typetour_core::{Error, Result, Transcript, Value};
pub use typetour_numeric as numeric;

/// Run every demonstration and collect the transcripts in tour order
///
/// Value types first (numbers, booleans, characters), then reference
/// types (strings, containers). Demonstrations are independent, so
/// the order is presentation only.
pub fn full_tour() -> Result<Vec<Transcript>> {
    Ok(vec![
        numeric::integer_report().transcript,
        numeric::float_report()?.transcript,
        numeric::boolean_report().transcript,
        numeric::character_report().transcript,
        containers::string_report().transcript,
        containers::dynamic_report()?.transcript,
        containers::array_report()?.transcript,
        containers::list_report()?.transcript,
        containers::queue_report()?.transcript,
        containers::stack_report()?.transcript,
        containers::map_report()?.transcript,
        containers::set_report().transcript,
    ])
}
