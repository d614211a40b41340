//! Tests for the public testing helpers.

use grouper::testing::*;
use std::collections::HashMap;

#[test]
fn partition_accepts_valid_lists() {
    assert_partition(&[vec![1, 2], vec![0, 3]], 4);
    assert_partition(&[], 0);
}

#[test]
fn collections_equal_accepts_matching_lists() {
    assert_collections_equal(&[vec![0, 3], vec![1, 2]], &[vec![0, 3], vec![1, 2]]);
}

#[test]
#[should_panic(expected = "Full expected: [[0, 3], [1, 2]]")]
fn collections_equal_reports_full_lists() {
    assert_collections_equal(&[vec![0, 3], vec![2, 1]], &[vec![0, 3], vec![1, 2]]);
}

#[test]
#[should_panic(expected = "Collection length mismatch")]
fn collections_equal_rejects_extra_group() {
    assert_collections_equal(&[vec![0], vec![1]], &[vec![0, 1]]);
}

#[test]
#[should_panic(expected = "appears more than once")]
fn partition_rejects_duplicates() {
    assert_partition(&[vec![0, 1], vec![1]], 2);
}

#[test]
#[should_panic(expected = "missing from every group")]
fn partition_rejects_omissions() {
    assert_partition(&[vec![0], vec![2]], 3);
}

#[test]
#[should_panic(expected = "out of range")]
fn partition_rejects_out_of_range() {
    assert_partition(&[vec![0, 5]], 2);
}

#[test]
#[should_panic(expected = "not in original order")]
fn stability_rejects_reordered_group() {
    assert_stable_within_groups(&[vec![0, 3], vec![2, 1]]);
}

#[test]
#[should_panic(expected = "first-seen order")]
fn first_seen_rejects_sorted_names() {
    let people = sample_people();
    let sorted = vec!["bar".to_string(), "foo".to_string()];
    assert_first_seen_order(&people, |p| p.name.clone(), &sorted);
}

#[test]
#[should_panic(expected = "is in group")]
fn aligned_rejects_swapped_lists() {
    let people = sample_people();
    let groups = vec!["foo".to_string(), "bar".to_string()];
    assert_aligned(&people, |p| p.name.clone(), &groups, &[vec![1, 2], vec![0, 3]]);
}

#[test]
fn results_equal_ignores_order() {
    let actual = HashMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
    assert_results_equal(&actual, &[("a", 1), ("b", 2)]);
}

#[test]
#[should_panic(expected = "Result mismatch")]
fn results_equal_rejects_wrong_value() {
    let actual = HashMap::from([("a".to_string(), 1)]);
    assert_results_equal(&actual, &[("a", 2)]);
}

#[test]
#[should_panic(expected = "Result size mismatch")]
fn results_equal_rejects_missing_group() {
    let actual = HashMap::from([("a".to_string(), 1)]);
    assert_results_equal(&actual, &[("a", 1), ("b", 2)]);
}
