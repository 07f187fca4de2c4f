//! Value type demonstrations: numbers, booleans, characters
//!
//! Each test prints its transcript to stdout (visible with
//! `cargo test -- --nocapture`) and asserts the semantics the
//! narration teaches. Tests are independent and order-independent.

mod booleans;
mod characters;
mod numbers;
