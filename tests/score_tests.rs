use panelfit::error::PanelFitError;
use panelfit::score::{Score, ScoreValue};
use std::cmp::Ordering;

fn flat(a: u32, b: u32) -> Score {
    Score::of([("a", ScoreValue::Num(a)), ("b", ScoreValue::Num(b))])
}

fn nested(outer: u32, inner: Score) -> Score {
    Score::of([
        ("outer", ScoreValue::Num(outer)),
        ("inner", ScoreValue::Nested(inner)),
    ])
}

#[test]
fn sum_adds_elementwise() {
    let total = Score::sum([&flat(1, 2), &flat(10, 20), &flat(100, 200)]).unwrap();
    assert_eq!(total, flat(111, 222));
}

#[test]
fn sum_recurses_into_nested_dimensions() {
    let total = Score::sum([&nested(1, flat(2, 3)), &nested(10, flat(20, 30))]).unwrap();
    assert_eq!(total, nested(11, flat(22, 33)));
}

#[test]
fn sum_skips_empty_scores() {
    let total = Score::sum([&Score::empty(), &flat(5, 7), &Score::empty()]).unwrap();
    assert_eq!(total, flat(5, 7));
}

#[test]
fn empty_nested_dimensions_act_as_identity() {
    let sparse = nested(1, Score::empty());
    let dense = nested(2, flat(3, 4));

    assert_eq!(Score::sum([&sparse, &dense]).unwrap(), nested(3, flat(3, 4)));
    assert_eq!(Score::sum([&dense, &sparse]).unwrap(), nested(3, flat(3, 4)));
}

#[test]
fn sum_of_nothing_is_empty() {
    assert!(Score::sum([]).unwrap().is_empty());
    assert!(Score::sum([&Score::empty()]).unwrap().is_empty());
}

#[test]
fn sum_rejects_mismatched_keys() {
    let other = Score::of([("a", ScoreValue::Num(1)), ("c", ScoreValue::Num(2))]);
    let err = Score::sum([&flat(1, 2), &other]).unwrap_err();
    assert!(matches!(err, PanelFitError::ScoreStructure(_)));
}

#[test]
fn sum_rejects_mismatched_sizes() {
    let short = Score::of([("a", ScoreValue::Num(1))]);
    let err = Score::sum([&flat(1, 2), &short]).unwrap_err();
    assert!(matches!(err, PanelFitError::ScoreStructure(_)));
}

#[test]
fn sum_rejects_mismatched_value_kinds() {
    let other = Score::of([
        ("a", ScoreValue::Num(1)),
        ("b", ScoreValue::Nested(flat(1, 2))),
    ]);
    let err = Score::sum([&flat(1, 2), &other]).unwrap_err();
    assert!(matches!(err, PanelFitError::ScoreStructure(_)));
}

#[test]
fn compare_is_lexicographic() {
    assert_eq!(flat(1, 0).compare(&flat(0, 99)), Ordering::Greater);
    assert_eq!(flat(1, 5).compare(&flat(1, 6)), Ordering::Less);
    assert_eq!(flat(3, 3).compare(&flat(3, 3)), Ordering::Equal);
}

#[test]
fn compare_recurses_into_nested_dimensions() {
    assert_eq!(
        nested(1, flat(2, 5)).compare(&nested(1, flat(2, 4))),
        Ordering::Greater
    );
    assert_eq!(
        nested(1, flat(2, 5)).compare(&nested(1, flat(2, 5))),
        Ordering::Equal
    );
}

#[test]
fn empty_compares_below_any_score() {
    assert_eq!(Score::empty().compare(&flat(0, 0)), Ordering::Less);
    assert_eq!(flat(0, 0).compare(&Score::empty()), Ordering::Greater);
    assert_eq!(Score::empty().compare(&Score::empty()), Ordering::Equal);
}

#[test]
#[should_panic(expected = "different sizes")]
fn compare_panics_on_mismatched_sizes() {
    let short = Score::of([("a", ScoreValue::Num(1))]);
    let _ = flat(1, 2).compare(&short);
}

#[test]
#[should_panic(expected = "different structures")]
fn compare_panics_on_mismatched_keys() {
    let other = Score::of([("a", ScoreValue::Num(1)), ("c", ScoreValue::Num(2))]);
    let _ = flat(1, 2).compare(&other);
}
