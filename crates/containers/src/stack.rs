//! LIFO stack: strict last-in-first-out removal
//!
//! The item removed is always the most-recently-pushed remaining
//! element. Pop from an empty stack is an error condition the
//! demonstration never triggers.

use serde::{Deserialize, Serialize};
use tracing::debug;
use typetour_core::{Error, Result, Transcript};

/// Remove the top of the stack
pub fn pop(stack: &mut Vec<String>) -> Result<String> {
    stack.pop().ok_or(Error::Empty("stack"))
}

/// Evidence of last-in-first-out removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackReport {
    /// Values pushed, in order
    pub pushed: Vec<String>,
    /// The value the first pop returned
    pub popped: String,
    /// Elements still stacked afterwards
    pub remaining: usize,
    /// Narration
    pub transcript: Transcript,
}

/// Push two values and pop once: the top is the most recent push
pub fn stack_report() -> Result<StackReport> {
    let pushed = vec!["Lawrence".to_string(), "Ingeborg".to_string()];
    let mut stack = pushed.clone();

    let popped = pop(&mut stack)?;
    let remaining = stack.len();
    debug!(popped = %popped, remaining, "stack transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!("The next item off the stack is: {popped}."));
    Ok(StackReport {
        pushed,
        popped,
        remaining,
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pop_returns_most_recent_push() {
        let report = stack_report().unwrap();
        assert_eq!(report.popped, "Ingeborg");
        assert_eq!(report.pushed.last(), Some(&report.popped));
        assert_eq!(report.remaining, 1);
    }

    #[test]
    fn test_pop_on_empty_is_refused() {
        let mut stack = Vec::new();
        assert_eq!(pop(&mut stack).unwrap_err(), Error::Empty("stack"));
    }

    proptest! {
        /// Draining any stack yields elements in exact reverse push
        /// order.
        #[test]
        fn prop_drain_reverses_push_order(items in proptest::collection::vec("[a-z]{1,8}", 1..10)) {
            let mut stack = items.clone();
            let mut drained = Vec::new();
            while let Ok(item) = pop(&mut stack) {
                drained.push(item);
            }
            let mut expected = items;
            expected.reverse();
            prop_assert_eq!(drained, expected);
        }
    }
}
