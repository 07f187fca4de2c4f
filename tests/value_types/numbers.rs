//! Integer range and floating-point precision demonstrations

use typetour::numeric::{
    float_report, integer_report, significant_digits_of, FloatClass, Signedness,
};

/// Expected bounds for every integer kind, narrowest first
const EXPECTED_BOUNDS: [(&str, i128, i128); 8] = [
    ("u8", 0, 255),
    ("i8", -128, 127),
    ("u16", 0, 65_535),
    ("i16", -32_768, 32_767),
    ("u32", 0, 4_294_967_295),
    ("i32", -2_147_483_648, 2_147_483_647),
    ("u64", 0, 18_446_744_073_709_551_615),
    ("i64", -9_223_372_036_854_775_808, 9_223_372_036_854_775_807),
];

#[test]
fn integer_kinds_report_their_exact_bounds() {
    let report = integer_report();
    print!("{}", report.transcript);

    assert_eq!(report.ranges.len(), EXPECTED_BOUNDS.len());
    for (range, (name, min, max)) in report.ranges.iter().zip(EXPECTED_BOUNDS) {
        assert_eq!(range.name, name);
        assert_eq!(range.min, min, "{name} minimum");
        assert_eq!(range.max, max, "{name} maximum");
    }
}

#[test]
fn unsigned_kinds_start_at_zero_and_signed_kinds_split_around_it() {
    for range in integer_report().ranges {
        match range.signedness {
            Signedness::Unsigned => {
                assert_eq!(range.min, 0);
                assert_eq!(range.max, (1i128 << range.bits) - 1);
            }
            Signedness::Signed => {
                assert_eq!(range.min, -(1i128 << (range.bits - 1)));
                assert_eq!(range.max, (1i128 << (range.bits - 1)) - 1);
            }
        }
    }
}

#[test]
fn storing_pi_shows_each_precision_boundary() {
    let report = float_report().unwrap();
    print!("{}", report.transcript);

    let [single, double, decimal] = &report.samples[..] else {
        panic!("expected one sample per precision class");
    };

    assert_eq!(single.class, FloatClass::Single);
    assert_eq!(significant_digits_of(&single.stored), 7);

    assert_eq!(double.class, FloatClass::Double);
    let double_digits = significant_digits_of(&double.stored);
    assert!((15..=16).contains(&double_digits));

    assert_eq!(decimal.class, FloatClass::Decimal);
    let fractional = decimal.stored.split('.').nth(1).unwrap();
    assert!((28..=29).contains(&fractional.len()));
}

#[test]
fn every_stored_rendering_differs_from_the_thirty_digit_literal() {
    for sample in float_report().unwrap().samples {
        assert_ne!(
            sample.stored, sample.literal,
            "{} should round the literal",
            sample.class
        );
    }
}
