//! Testing utilities for code built on [`Grouper`](crate::Grouper).
//!
//! - **Assertions**: check the structural guarantees of `group_by` output and
//!   compare reduction results independent of hash-map order
//! - **Fixtures**: small record sets used throughout the test suite
//!
//! # Quick Start
//!
//! ```
//! use grouper::Grouper;
//! use grouper::testing::*;
//!
//! let people = sample_people();
//! let mut g = Grouper::new(&people).unwrap();
//! let indices = g.group_by(|p: &Person| p.name.clone());
//!
//! assert_partition(&indices, people.len());
//! assert_stable_within_groups(&indices);
//! assert_first_seen_order(&people, |p| p.name.clone(), g.groups());
//!
//! let totals = g.reduce(&indices, |group| group.iter().map(|p| p.age).sum::<u32>());
//! assert_results_equal(&totals, &[("foo", 3), ("bar", 8)]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
