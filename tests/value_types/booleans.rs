//! Boolean demonstrations: two inhabitants, derived from comparisons

use typetour::numeric::boolean_report;

#[test]
fn comparisons_over_a_stored_integer_yield_both_inhabitants() {
    let report = boolean_report();
    print!("{}", report.transcript);

    assert_eq!(report.age, 24);
    assert!(report.is_age, "24 == 24 must hold");
    assert!(!report.is_not_age, "24 != 24 must not hold");
}

#[test]
#[allow(clippy::eq_op, clippy::bool_assert_comparison)]
fn the_two_inhabitants_are_self_equal() {
    assert_eq!(true, true);
    assert_eq!(false, false);
}
