//! Errors raised while constructing a [`Grouper`](crate::Grouper).
//!
//! Construction is the only fallible step. Once a grouper exists, grouping and
//! reduction always succeed.

use serde::ser;
use std::fmt::Display;
use thiserror::Error;

/// Result alias used by the validating entry points.
pub type Result<T, E = GrouperError> = std::result::Result<T, E>;

/// The input handed to a grouper was not a sequence of records.
#[derive(Debug, Error)]
pub enum GrouperError {
    /// The input is not a sequence, or one of its elements is not a record.
    #[error("unsupported input type ({observed}), must be [struct] or [&struct]")]
    UnsupportedInput {
        /// Rust type name of the rejected input.
        observed: &'static str,
    },

    /// The input's own `Serialize` impl failed while its shape was inspected.
    #[error("unsupported input type ({observed}): {source}")]
    Inspect {
        /// Rust type name of the rejected input.
        observed: &'static str,
        /// Error raised by the input's `Serialize` impl.
        #[source]
        source: ShapeError,
    },
}

impl GrouperError {
    /// Type name of the input that was rejected.
    #[must_use]
    pub fn observed(&self) -> &'static str {
        match self {
            Self::UnsupportedInput { observed } | Self::Inspect { observed, .. } => observed,
        }
    }
}

/// Error reported by a `Serialize` impl during shape inspection.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ShapeError(String);

impl ser::Error for ShapeError {
    fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}
