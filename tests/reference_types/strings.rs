//! String demonstrations: escapes and raw literals

use typetour::containers::{string_report, ESCAPED_PATH, RAW_PATH};

#[test]
fn escaped_and_raw_literals_render_the_same_characters() {
    let report = string_report();
    print!("{}", report.transcript);

    assert_eq!(report.escaped_path, report.raw_path);
    assert_eq!(ESCAPED_PATH, RAW_PATH);
    assert_eq!(ESCAPED_PATH.matches('\\').count(), 4);
}

#[test]
fn a_string_is_immutable_once_constructed() {
    let report = string_report();
    let before = report.name.clone();
    // Reading the sample in any number of ways leaves it unchanged.
    let _ = report.name.len();
    let _ = report.name.chars().rev().count();
    assert_eq!(report.name, before);
}

#[test]
fn escapes_let_reserved_characters_into_a_literal() {
    let report = string_report();
    assert!(report.with_escapes.contains('"'));
    assert!(report.with_escapes.contains('\\'));
}
