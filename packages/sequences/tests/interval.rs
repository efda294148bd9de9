use std::collections::BTreeSet;
use std::ops::Bound;

use utilkit_sequences::{ArithmeticProgression, Interval, Sequence};

#[test]
fn test_membership_follows_brackets() {
    let cases = [
        (Interval::closed(0, 10), [true, true, true]),
        (Interval::open(0, 10), [false, true, false]),
        (Interval::closed_open(0, 10), [true, true, false]),
        (Interval::open_closed(0, 10), [false, true, true]),
    ];
    for (interval, expected) in cases {
        let found = [0, 5, 10].map(|x| interval.contains(&x));
        assert_eq!(found, expected, "{}", interval);
    }
}

#[test]
fn test_selects_from_ordered_collections() {
    let set: BTreeSet<i32> = (1..=10).collect();
    let picked: Vec<i32> = set.range(Interval::open_closed(3, 6)).copied().collect();
    assert_eq!(picked, vec![4, 5, 6]);

    let tail: Vec<i32> = set.range(Interval::greater_than(8)).copied().collect();
    assert_eq!(tail, vec![9, 10]);
}

#[test]
fn test_progression_terms_in_interval() {
    let a = ArithmeticProgression::new(1.0, 10.0);
    let window = Interval::closed_open(20.0, 60.0);
    let inside: Vec<f64> = a
        .terms(1, 10)
        .unwrap()
        .into_iter()
        .filter(|term| window.contains(term))
        .collect();
    assert_eq!(inside, vec![21.0, 31.0, 41.0, 51.0]);
}

#[test]
fn test_bounds_are_exposed() {
    let i = Interval::new(Bound::Excluded(-1), Bound::Unbounded);
    assert_eq!(i, Interval::greater_than(-1));
    assert_eq!(i.start(), Bound::Excluded(&-1));
    assert_eq!(i.to_string(), "u(-1; +∞)");
}
