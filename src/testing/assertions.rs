//! Assertion functions for grouping and reduction output.

use std::collections::HashMap;
use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use grouper::testing::assert_collections_equal;
///
/// assert_collections_equal(&[vec![0, 3], vec![1, 2]], &[vec![0, 3], vec![1, 2]]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that `indices` partitions `0..len`: every position appears in exactly
/// one list and nothing outside the range appears.
///
/// # Panics
///
/// Panics on a duplicate, missing or out-of-range position.
///
/// # Example
///
/// ```
/// use grouper::testing::assert_partition;
///
/// assert_partition(&[vec![1, 2], vec![0, 3]], 4);
/// ```
pub fn assert_partition(indices: &[Vec<usize>], len: usize) {
    let mut seen = vec![false; len];
    for (g, list) in indices.iter().enumerate() {
        for &i in list {
            assert!(
                i < len,
                "Position {i} in group {g} is out of range:\n  Length: {len}\n  Indices: {indices:?}"
            );
            assert!(
                !seen[i],
                "Position {i} appears more than once:\n  Indices: {indices:?}"
            );
            seen[i] = true;
        }
    }

    let missing: Vec<usize> = (0..len).filter(|&i| !seen[i]).collect();
    assert!(
        missing.is_empty(),
        "Positions missing from every group: {missing:?}\n  Indices: {indices:?}"
    );
}

/// Assert that each index list is strictly increasing, i.e. records keep their
/// original relative order inside a group.
///
/// # Panics
///
/// Panics if any list is out of order.
pub fn assert_stable_within_groups(indices: &[Vec<usize>]) {
    for (g, list) in indices.iter().enumerate() {
        assert!(
            list.windows(2).all(|w| w[0] < w[1]),
            "Group {g} is not in original order: {list:?}"
        );
    }
}

/// Assert that `groups` lists the keys of `records` in order of first
/// appearance, each once.
///
/// # Panics
///
/// Panics if the order or the set of names differs.
///
/// # Example
///
/// ```
/// use grouper::testing::assert_first_seen_order;
///
/// let words = vec!["b", "a", "b", "c"];
/// let groups = vec!["b".to_string(), "a".to_string(), "c".to_string()];
/// assert_first_seen_order(&words, |w| w.to_string(), &groups);
/// ```
pub fn assert_first_seen_order<T>(records: &[T], key_fn: impl Fn(&T) -> String, groups: &[String]) {
    let mut expected: Vec<String> = Vec::new();
    for record in records {
        let key = key_fn(record);
        if !expected.contains(&key) {
            expected.push(key);
        }
    }
    assert_eq!(
        groups,
        expected.as_slice(),
        "Group names are not in first-seen order:\n  Expected: {expected:?}\n  Actual: {groups:?}"
    );
}

/// Assert that index list `i` only holds records whose key is `groups[i]`.
///
/// # Panics
///
/// Panics if the list count differs from the name count or a record sits in
/// the wrong group.
pub fn assert_aligned<T: Debug>(
    records: &[T],
    key_fn: impl Fn(&T) -> String,
    groups: &[String],
    indices: &[Vec<usize>],
) {
    assert_eq!(
        groups.len(),
        indices.len(),
        "Group count mismatch:\n  Names: {groups:?}\n  Indices: {indices:?}"
    );
    for (name, list) in groups.iter().zip(indices) {
        for &i in list {
            let key = key_fn(&records[i]);
            assert_eq!(
                &key, name,
                "Record {i} is in group {name:?} but has key {key:?}:\n  Record: {:?}",
                records[i]
            );
        }
    }
}

/// Assert that a reduction result holds exactly the expected `(group, value)`
/// pairs. Order of `expected` does not matter.
///
/// # Panics
///
/// Panics if a group is missing, unexpected, or has a different value.
///
/// # Example
///
/// ```
/// use grouper::testing::assert_results_equal;
/// use std::collections::HashMap;
///
/// let actual = HashMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
/// assert_results_equal(&actual, &[("a", 1), ("b", 2)]);
/// ```
pub fn assert_results_equal<V>(actual: &HashMap<String, V>, expected: &[(&str, V)])
where
    V: Debug + PartialEq,
{
    let mut actual_sorted: Vec<(&str, &V)> = actual.iter().map(|(k, v)| (k.as_str(), v)).collect();
    actual_sorted.sort_by(|a, b| a.0.cmp(b.0));
    let mut expected_sorted: Vec<(&str, &V)> = expected.iter().map(|(k, v)| (*k, v)).collect();
    expected_sorted.sort_by(|a, b| a.0.cmp(b.0));

    assert_eq!(
        actual_sorted.len(),
        expected_sorted.len(),
        "Result size mismatch:\n  Expected: {expected_sorted:?}\n  Actual: {actual_sorted:?}"
    );

    for (i, ((ak, av), (ek, ev))) in actual_sorted.iter().zip(expected_sorted.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "Result mismatch at index {i} after sorting:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})\n  Full expected: {expected_sorted:?}\n  Full actual: {actual_sorted:?}"
        );
    }
}
