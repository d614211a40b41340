//! # Grouper
//!
//! Split a slice of records into **named groups** with a key function, then
//! **reduce** each group with a function of your own.
//!
//! ## Key Features
//!
//! - **Validated input** - construction checks that every element is a record
//!   (a struct, tuple struct or map, or a reference to one), judged by how the
//!   type serializes rather than by its field values
//! - **First-seen group order** - groups are reported in the order their keys
//!   first appear, members keep their original relative order
//! - **Two-step or one-step** - `group_by` then `reduce`, or `group_reduce`
//! - **Typed results** - reducers return any `R`, collected into `HashMap<String, R>`
//! - **Optional parallel reduction** - `reduce_par` runs one rayon task per group
//!
//! ## Quick Start
//!
//! ```
//! use grouper::Grouper;
//! use grouper::testing::{sample_people, Person};
//!
//! let people = sample_people(); // foo:1, bar:3, bar:5, foo:2
//! let mut g = Grouper::new(&people)?;
//!
//! let indices = g.group_by(|p: &Person| p.name.clone());
//! assert_eq!(g.groups(), ["foo", "bar"]);
//! assert_eq!(indices, vec![vec![0, 3], vec![1, 2]]);
//!
//! let totals = g.reduce(&indices, |group| group.iter().map(|p| p.age).sum::<u32>());
//! assert_eq!(totals["foo"], 3);
//! assert_eq!(totals["bar"], 8);
//! # Ok::<(), grouper::GrouperError>(())
//! ```
//!
//! ## Reducing with the group name
//!
//! `reduce_with_name` passes the name alongside the subset and returns nothing;
//! the reducer records results wherever it likes. Groups are visited in group
//! order.
//!
//! ```
//! use grouper::Grouper;
//! use grouper::testing::{sample_people, Person};
//! use std::collections::HashMap;
//!
//! let people = sample_people();
//! let mut g = Grouper::new(&people)?;
//! let mut oldest: HashMap<String, u32> = HashMap::new();
//! g.group_reduce_with_name(
//!     |p: &Person| p.name.clone(),
//!     |group, name| {
//!         oldest.insert(name.to_string(), group.iter().map(|p| p.age).max().unwrap_or(0));
//!     },
//! );
//! assert_eq!(oldest["bar"], 5);
//! # Ok::<(), grouper::GrouperError>(())
//! ```
//!
//! ## Sequences of references
//!
//! A slice of `&Record` works the same way. Subsets then hold copies of the
//! references, not of the records.
//!
//! ```
//! use grouper::Grouper;
//! use grouper::testing::{sample_people, Person};
//!
//! let people = sample_people();
//! let refs: Vec<&Person> = people.iter().collect();
//! let mut g = Grouper::new(&refs)?;
//! let counts = g.group_reduce(|p: &&Person| p.name.clone(), |group| group.len());
//! assert_eq!(counts["foo"], 2);
//! # Ok::<(), grouper::GrouperError>(())
//! ```
//!
//! ## Rejected input
//!
//! ```
//! use grouper::{ElementKind, Grouper};
//!
//! let words = vec!["foo".to_string()];
//! let err = Grouper::new(&words).unwrap_err();
//! assert!(err.to_string().starts_with("unsupported input type"));
//!
//! assert!(ElementKind::inspect("foo").is_err());
//! ```
//!
//! ## Module Overview
//!
//! - [`grouper`] - the [`Grouper`] type with grouping and reduction
//! - [`element_kind`] - input shape validation
//! - [`config`] - group order and thread settings
//! - [`keys`] - ready-made key functions
//! - [`error`] - construction errors
//! - [`testing`] - assertions and fixtures for tests

pub mod config;
pub mod element_kind;
pub mod error;
pub mod grouper;
pub mod keys;
pub mod testing;

pub use config::{GroupOrder, GrouperConfig};
pub use element_kind::ElementKind;
pub use error::{GrouperError, Result};
pub use grouper::Grouper;
