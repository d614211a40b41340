//! The [`Grouper`] type: split a slice of records into named groups and reduce
//! each group to one value.
//!
//! Grouping and reduction are separate steps. [`Grouper::group_by`] scans the
//! records once and returns, per group, the positions of its members; the
//! group names are cached on the grouper in the same order. The reduce family
//! then materializes each group as a fresh `Vec<T>` and hands it to the
//! caller's reducer.
//!
//! ```
//! use grouper::Grouper;
//! use serde::Serialize;
//!
//! #[derive(Clone, Serialize)]
//! struct Person { name: String, age: u32 }
//!
//! let people = vec![
//!     Person { name: "foo".into(), age: 1 },
//!     Person { name: "bar".into(), age: 3 },
//!     Person { name: "bar".into(), age: 5 },
//!     Person { name: "foo".into(), age: 2 },
//! ];
//!
//! let mut g = Grouper::new(&people)?;
//! let totals = g.group_reduce(
//!     |p: &Person| p.name.clone(),
//!     |group: Vec<Person>| group.iter().map(|p| p.age).sum::<u32>(),
//! );
//!
//! assert_eq!(g.groups(), ["foo", "bar"]);
//! assert_eq!(totals["foo"], 3);
//! assert_eq!(totals["bar"], 8);
//! # Ok::<(), grouper::GrouperError>(())
//! ```

use crate::config::{GroupOrder, GrouperConfig};
use crate::element_kind::ElementKind;
use crate::error::Result;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Groups a borrowed slice of records.
///
/// `T` is either a record type or a reference to one (`Grouper<'_, &Person>`).
/// The slice is never copied or mutated; only the per-group subsets built
/// during reduction hold clones of its elements.
#[derive(Clone, Debug)]
pub struct Grouper<'a, T> {
    records: &'a [T],
    kind: ElementKind,
    groups: Vec<String>,
    config: GrouperConfig,
}

impl<'a, T: Serialize> Grouper<'a, T> {
    /// Build a grouper over `records` after checking that every element is a
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`GrouperError`](crate::GrouperError) when an element is not a
    /// struct, tuple struct, unit struct or map (for example `[String]` or
    /// `[&String]`).
    pub fn new(records: &'a [T]) -> Result<Self> {
        let kind = ElementKind::of_records(records)?;
        debug!("grouper over {} records of {}", records.len(), kind.input_type());
        Ok(Self {
            records,
            kind,
            groups: Vec::new(),
            config: GrouperConfig::default(),
        })
    }
}

impl<'a, T> Grouper<'a, T> {
    /// Replace the grouper's configuration.
    #[must_use]
    pub fn with_config(mut self, config: GrouperConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    /// The borrowed input slice.
    pub fn records(&self) -> &'a [T] {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when there are no records to group.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shape descriptor captured at construction.
    pub fn element_kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Group names cached by the most recent [`group_by`](Self::group_by) call.
    /// Empty before the first call.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Assign every record to the group named by `key_fn`.
    ///
    /// `key_fn` is called exactly once per record, left to right. The returned
    /// index lists are aligned with [`groups`](Self::groups): list `i` holds the
    /// positions of group `i`, in their original order. Any names cached by an
    /// earlier call are replaced.
    pub fn group_by<F>(&mut self, key_fn: F) -> Vec<Vec<usize>>
    where
        F: Fn(&T) -> String,
    {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut names: Vec<String> = Vec::new();
        let mut indices: Vec<Vec<usize>> = Vec::new();

        for (i, record) in self.records.iter().enumerate() {
            let key = key_fn(record);
            if let Some(&slot) = slots.get(&key) {
                indices[slot].push(i);
            } else {
                slots.insert(key.clone(), names.len());
                names.push(key);
                indices.push(vec![i]);
            }
        }

        if self.config.order == GroupOrder::Sorted {
            let mut paired: Vec<(String, Vec<usize>)> = names.into_iter().zip(indices).collect();
            paired.sort_by(|a, b| a.0.cmp(&b.0));
            let (sorted_names, sorted_indices): (Vec<String>, Vec<Vec<usize>>) =
                paired.into_iter().unzip();
            names = sorted_names;
            indices = sorted_indices;
        }

        debug!("grouped {} records into {} groups", self.records.len(), names.len());
        self.groups = names;
        indices
    }
}

impl<'a, T: Clone> Grouper<'a, T> {
    /// Copy the records at `indices` into a new vector, in list order.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of range for the grouped slice.
    pub fn subset(&self, indices: &[usize]) -> Vec<T> {
        indices.iter().map(|&i| self.records[i].clone()).collect()
    }

    /// Reduce each group from the last [`group_by`](Self::group_by) to one value.
    ///
    /// `indices` must be the lists returned by that call. The reducer runs once
    /// per group, in group order, on a freshly built subset.
    ///
    /// # Panics
    ///
    /// Panics if `indices` holds a position outside the grouped slice.
    pub fn reduce<R, F>(&self, indices: &[Vec<usize>], reducer: F) -> HashMap<String, R>
    where
        F: FnMut(Vec<T>) -> R,
    {
        self.reduce_groups(&self.groups, indices, reducer)
    }

    /// Like [`reduce`](Self::reduce), but with group names supplied by the
    /// caller as a parallel array instead of read from the grouper.
    ///
    /// Duplicate names keep the value of their last group.
    ///
    /// # Panics
    ///
    /// Panics if `indices` holds a position outside the grouped slice.
    pub fn reduce_groups<R, F>(
        &self,
        names: &[String],
        indices: &[Vec<usize>],
        mut reducer: F,
    ) -> HashMap<String, R>
    where
        F: FnMut(Vec<T>) -> R,
    {
        check_alignment(names.len(), indices.len());
        names
            .iter()
            .zip(indices)
            .map(|(name, positions)| {
                trace!("reducing group {name:?} ({} records)", positions.len());
                (name.clone(), reducer(self.subset(positions)))
            })
            .collect()
    }

    /// Run `reducer` on each group together with its name, in group order.
    ///
    /// Results are whatever the reducer records on its own; nothing is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if `indices` holds a position outside the grouped slice.
    pub fn reduce_with_name<F>(&self, indices: &[Vec<usize>], mut reducer: F)
    where
        F: FnMut(Vec<T>, &str),
    {
        check_alignment(self.groups.len(), indices.len());
        for (name, positions) in self.groups.iter().zip(indices) {
            trace!("reducing group {name:?} ({} records)", positions.len());
            reducer(self.subset(positions), name);
        }
    }

    /// [`group_by`](Self::group_by) followed by [`reduce`](Self::reduce).
    pub fn group_reduce<K, R, F>(&mut self, key_fn: K, reducer: F) -> HashMap<String, R>
    where
        K: Fn(&T) -> String,
        F: FnMut(Vec<T>) -> R,
    {
        let indices = self.group_by(key_fn);
        self.reduce(&indices, reducer)
    }

    /// [`group_by`](Self::group_by) followed by
    /// [`reduce_with_name`](Self::reduce_with_name).
    pub fn group_reduce_with_name<K, F>(&mut self, key_fn: K, reducer: F)
    where
        K: Fn(&T) -> String,
        F: FnMut(Vec<T>, &str),
    {
        let indices = self.group_by(key_fn);
        self.reduce_with_name(&indices, reducer);
    }
}

impl<'a, T: Clone + Send + Sync> Grouper<'a, T> {
    /// Parallel [`reduce`](Self::reduce): one rayon task per group.
    ///
    /// Runs on a dedicated pool when [`GrouperConfig::threads`] is set,
    /// otherwise on the global pool. For a pure reducer the result equals
    /// `reduce`.
    ///
    /// # Panics
    ///
    /// Panics if `indices` holds a position outside the grouped slice.
    pub fn reduce_par<R, F>(&self, indices: &[Vec<usize>], reducer: F) -> HashMap<String, R>
    where
        R: Send,
        F: Fn(Vec<T>) -> R + Send + Sync,
    {
        check_alignment(self.groups.len(), indices.len());
        let run = || {
            self.groups
                .par_iter()
                .zip(indices)
                .map(|(name, positions)| (name.clone(), reducer(self.subset(positions))))
                .collect::<HashMap<String, R>>()
        };

        match self.config.threads {
            Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(run),
                Err(err) => {
                    warn!("could not build a {n}-thread pool ({err}), using the global pool");
                    run()
                }
            },
            None => run(),
        }
    }

    /// [`group_by`](Self::group_by) followed by [`reduce_par`](Self::reduce_par).
    pub fn group_reduce_par<K, R, F>(&mut self, key_fn: K, reducer: F) -> HashMap<String, R>
    where
        K: Fn(&T) -> String,
        R: Send,
        F: Fn(Vec<T>) -> R + Send + Sync,
    {
        let indices = self.group_by(key_fn);
        self.reduce_par(&indices, reducer)
    }
}

fn check_alignment(names: usize, indices: usize) {
    if names != indices {
        warn!("{indices} index lists for {names} groups; reducing the first {}", names.min(indices));
    }
}
