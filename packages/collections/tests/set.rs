use utilkit_collections::SortedSet;

fn set(elements: &[i32]) -> SortedSet<i32> {
    elements.iter().copied().collect()
}

#[test]
fn test_init() {
    let from_values = set(&[3, 1, 2, 1]);
    let from_vec = SortedSet::from(vec![1, 2, 3]);
    assert_eq!(from_values, from_vec);
    assert_eq!(from_values.to_string(), "u{1, 2, 3}");
    assert!(SortedSet::<i32>::new().is_empty());
}

#[test]
fn test_set_elements() {
    let mut s = set(&[1, 2]);
    s.set_elements([9, 7, 9]);
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![7, 9]);
    assert!(s.contains(&7));
    assert!(!s.contains(&1));
}

#[test]
fn test_union() {
    let a = set(&[1, 2]);
    let b = set(&[2, 3]);
    assert_eq!(&a | &b, set(&[1, 2, 3]));
    assert_eq!(&a + &b, set(&[1, 2, 3]));
    assert_eq!(a.union([4]), set(&[1, 2, 4]));
}

#[test]
fn test_difference() {
    let a = set(&[1, 2, 3]);
    let b = set(&[2, 5]);
    assert_eq!(&a - &b, set(&[1, 3]));
    assert_eq!(&a / &b, set(&[1, 3]));
    assert_eq!(&b - &a, set(&[5]));
    assert_eq!(a.difference([3]), set(&[1, 2]));
}

#[test]
fn test_intersection() {
    let a = set(&[1, 2, 3]);
    let b = set(&[2, 3, 4]);
    assert_eq!(&a & &b, set(&[2, 3]));
    assert_eq!(&a * &b, set(&[2, 3]));
    assert_eq!(a.intersection([3, 8]), set(&[3]));
}

#[test]
fn test_complement() {
    let universe = set(&[1, 2, 3, 4, 5]);
    let a = set(&[2, 4]);
    assert_eq!(a.complement(&universe), set(&[1, 3, 5]));
    assert!(set(&[]).complement(&universe) == universe);
    assert!(universe.complement(&universe).is_empty());
}

#[test]
fn test_implication() {
    let universe = set(&[1, 2, 3, 4, 5]);
    let a = set(&[1, 2]);
    let b = set(&[2, 3]);

    // a -> b is (not a) or b
    assert_eq!(a.implicate(b.clone(), &universe), set(&[2, 3, 4, 5]));
    // b -> a
    assert_eq!(b.implicate(a.clone(), &universe), set(&[1, 2, 4, 5]));
    // implying the whole universe yields the universe
    assert_eq!(a.implicate(universe.clone(), &universe), universe);
}

#[test]
fn test_subset_and_iteration() {
    let a = set(&[2, 1]);
    let b = set(&[1, 2, 3]);
    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));

    let mut seen = Vec::new();
    for element in &b {
        seen.push(*element);
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(b.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
}
