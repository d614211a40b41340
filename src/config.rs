//! Grouper configuration.
//!
//! A [`GrouperConfig`] controls the order in which groups are reported and how
//! many threads the parallel reducers use. The defaults match the plain
//! single-threaded behavior: first-seen order, rayon's global pool.
//!
//! Configs deserialize from JSON (or any serde format), with every field
//! optional:
//!
//! ```
//! use grouper::{GroupOrder, GrouperConfig};
//!
//! let cfg: GrouperConfig = serde_json::from_str(r#"{"order": "sorted"}"#).unwrap();
//! assert_eq!(cfg.order, GroupOrder::Sorted);
//! assert_eq!(cfg.threads, None);
//! ```

use serde::{Deserialize, Serialize};

/// Order of the group names produced by `group_by`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Order in which each key first appears while scanning the input.
    #[default]
    FirstSeen,
    /// Lexicographic order of the keys.
    Sorted,
}

/// Settings for a [`Grouper`](crate::Grouper); every field has a default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GrouperConfig {
    /// Order of the group names reported by `group_by`.
    pub order: GroupOrder,
    /// Worker threads for `reduce_par`; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl GrouperConfig {
    /// Set the group order.
    #[must_use]
    pub fn with_order(mut self, order: GroupOrder) -> Self {
        self.order = order;
        self
    }

    /// Run `reduce_par` on a dedicated pool of `threads` workers.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}
