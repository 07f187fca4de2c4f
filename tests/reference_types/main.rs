//! Reference type demonstrations: strings and collections
//!
//! Each test prints its transcript to stdout (visible with
//! `cargo test -- --nocapture`) and asserts the defining guarantee
//! of the container it drives. Tests are independent and
//! order-independent.

mod collections;
mod strings;
