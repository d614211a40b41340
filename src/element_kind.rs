//! Runtime shape checks for grouper input.
//!
//! A grouper only accepts an ordered sequence of records. "Record" is decided
//! by how an element serializes, never by the values it holds: structs, tuple
//! structs, unit structs, struct enum variants and maps (of any key type) are
//! records. References, `Box`, `Some` and newtype wrappers are looked through,
//! so `[&Person]` is accepted exactly like `[Person]`, while `[String]` and
//! `[&String]` are rejected.
//!
//! The checks run once, at construction. The grouping and reduction loops never
//! look at shapes again; they work on the typed `&[T]` directly.

mod shape;

use crate::error::{GrouperError, Result};
use serde::Serialize;
use shape::{RecordShape, Sequence, SequenceShape, Shape};
use std::any::type_name;

/// Descriptor of a validated input.
///
/// ```
/// use grouper::ElementKind;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Row { name: String, age: u32 }
///
/// let rows = vec![Row { name: "foo".into(), age: 1 }];
/// let kind = ElementKind::inspect(&rows).unwrap();
/// assert_eq!(kind.fields(), Some(&["name".to_string(), "age".to_string()][..]));
///
/// assert!(ElementKind::inspect("foo").is_err());
/// assert!(ElementKind::inspect(&vec!["foo".to_string()]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementKind {
    input: &'static str,
    fields: Option<Vec<String>>,
}

impl ElementKind {
    /// Validate an arbitrary value as a sequence of records.
    ///
    /// # Errors
    ///
    /// [`GrouperError::UnsupportedInput`] when `input` is not a sequence or
    /// holds a non-record element, [`GrouperError::Inspect`] when a
    /// `Serialize` impl inside it fails.
    pub fn inspect<S: Serialize + ?Sized>(input: &S) -> Result<Self> {
        let observed = type_name::<S>();
        match input.serialize(SequenceShape) {
            Ok(Sequence::Records(fields)) => Ok(Self { input: observed, fields }),
            Ok(Sequence::Mixed | Sequence::NotSequence) => {
                Err(GrouperError::UnsupportedInput { observed })
            }
            Err(source) => Err(GrouperError::Inspect { observed, source }),
        }
    }

    /// Validate a typed slice, one element at a time.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn of_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let observed = type_name::<[T]>();
        let mut fields = None;
        for record in records {
            match record.serialize(RecordShape) {
                Ok(Shape::Record(names)) => {
                    fields.get_or_insert(names);
                }
                Ok(Shape::Other) => return Err(GrouperError::UnsupportedInput { observed }),
                Err(source) => return Err(GrouperError::Inspect { observed, source }),
            }
        }
        Ok(Self { input: observed, fields })
    }

    /// Rust type name of the validated input (best-effort, from `type_name`).
    #[must_use]
    pub fn input_type(&self) -> &'static str {
        self.input
    }

    /// Field names of the first record, or `None` for an empty input.
    ///
    /// Struct fields come in declaration order and tuple struct fields are
    /// named `"0"`, `"1"`, .... Map keys are listed when they render as a
    /// string, number or bool.
    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}
