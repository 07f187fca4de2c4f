//! Collection demonstrations: one defining guarantee per container

use typetour::containers::{
    array_report, dynamic_report, list_report, map_report, queue_report, set_report, stack_report,
    FIXED_CAPACITY,
};
use typetour::Value;

#[test]
fn fixed_array_round_trips_an_index_and_keeps_its_capacity() {
    let report = array_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.first, "Hello world");
    assert_eq!(report.capacity_before, FIXED_CAPACITY);
    assert_eq!(report.capacity_after, FIXED_CAPACITY);
}

#[test]
fn growable_list_grows_without_resize_calls() {
    let report = list_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.len_before, 0);
    assert_eq!(report.len_after, 2);
    assert_eq!(report.second, "Ransford");
}

#[test]
fn dynamic_collection_mixes_element_kinds() {
    let report = dynamic_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.first, Value::Int(24));
    assert_eq!(report.kinds, ["Int", "String"]);
}

#[test]
fn queue_dequeues_the_earliest_enqueued_element() {
    let report = queue_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.enqueued, ["Paul", "Kenn"]);
    assert_eq!(report.dequeued, "Paul");
    assert_eq!(report.remaining, 1);
}

#[test]
fn stack_pops_the_most_recently_pushed_element() {
    let report = stack_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.pushed, ["Lawrence", "Ingeborg"]);
    assert_eq!(report.popped, "Ingeborg");
    assert_eq!(report.remaining, 1);
}

#[test]
fn map_lookup_returns_the_value_inserted_under_the_key() {
    let report = map_report().unwrap();
    print!("{}", report.transcript);

    assert_eq!(report.key, 37);
    assert_eq!(report.value, "Lawrence");
    assert_eq!(report.len, 3);
}

#[test]
fn set_ignores_a_duplicate_insert() {
    let report = set_report();
    print!("{}", report.transcript);

    assert!(report.first_insert_added);
    assert!(!report.repeat_insert_added);
    assert_eq!(report.len, 1);
}

#[test]
fn rerunning_a_demonstration_reproduces_its_transcript() {
    assert_eq!(
        queue_report().unwrap().transcript,
        queue_report().unwrap().transcript
    );
    assert_eq!(set_report().transcript, set_report().transcript);
}
