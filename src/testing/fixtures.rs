//! Pre-built record sets for tests and examples.

use serde::{Deserialize, Serialize};

/// A minimal record: a name to group on and a number to reduce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Grouping key in most tests.
    pub name: String,
    /// Value summed by most reducers.
    pub age: u32,
}

impl Person {
    /// Build a person from a borrowed name.
    #[must_use]
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// The four-record set `foo:1, bar:3, bar:5, foo:2`.
///
/// Grouped by name it yields `["foo", "bar"]` with age totals `foo = 3` and
/// `bar = 8`.
///
/// # Example
///
/// ```
/// use grouper::testing::sample_people;
///
/// let people = sample_people();
/// assert_eq!(people.len(), 4);
/// ```
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("foo", 1),
        Person::new("bar", 3),
        Person::new("bar", 5),
        Person::new("foo", 2),
    ]
}

/// `n` people spread over `keys` names in a scrambled but deterministic order.
///
/// Person `i` is named `k{(i * 7 + i / 3) % keys}` and has age `i`.
///
/// # Panics
///
/// Panics if `keys` is zero.
#[must_use]
pub fn scored_people(n: usize, keys: usize) -> Vec<Person> {
    assert!(keys > 0, "scored_people needs at least one key");
    (0..n)
        .map(|i| Person {
            name: format!("k{}", (i * 7 + i / 3) % keys),
            age: u32::try_from(i).unwrap_or(u32::MAX),
        })
        .collect()
}
