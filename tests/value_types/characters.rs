//! Character demonstrations: one Unicode scalar per sample

use typetour::numeric::character_report;

#[test]
fn letters_digits_symbols_and_whitespace_are_all_single_chars() {
    let report = character_report();
    print!("{}", report.transcript);

    assert_eq!(report.letter, 'C');
    assert_eq!(report.digit, '1');
    assert_eq!(report.symbol, '$');
    assert_eq!(report.space, ' ');
}

#[test]
fn a_char_is_exactly_one_scalar_value() {
    let report = character_report();
    for sample in [report.letter, report.digit, report.symbol, report.space] {
        assert!(char::from_u32(sample as u32).is_some());
    }
}
