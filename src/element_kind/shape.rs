//! Shape-only serializers.
//!
//! These walk a value through serde's data model just far enough to tell a
//! record from anything else. Field values are never visited, so acceptance
//! depends on how a type serializes, not on what its fields hold.

use crate::error::ShapeError;
use serde::Serialize;
use serde::ser::{self, Serializer};
use serde_json::Value;

/// Outer shape of one element.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// A struct, tuple struct, unit struct, struct variant or map, with its
    /// field names.
    Record(Vec<String>),
    Other,
}

/// Outer shape of a whole input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Sequence {
    /// Every element is a record; fields of the first one, if any.
    Records(Option<Vec<String>>),
    /// A sequence with at least one non-record element.
    Mixed,
    NotSequence,
}

// Every scalar, plus the variants that carry no fields, maps to `$out`.
macro_rules! scalars {
    ($out:expr) => {
        fn serialize_bool(self, _: bool) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_i8(self, _: i8) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_i16(self, _: i16) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_i32(self, _: i32) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_i64(self, _: i64) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_i128(self, _: i128) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_u8(self, _: u8) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_u16(self, _: u16) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_u32(self, _: u32) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_u64(self, _: u64) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_u128(self, _: u128) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_f32(self, _: f32) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_f64(self, _: f64) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_char(self, _: char) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_str(self, _: &str) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_bytes(self, _: &[u8]) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_none(self) -> Result<Self::Ok, Self::Error> { Ok($out) }
        fn serialize_unit(self) -> Result<Self::Ok, Self::Error> { Ok($out) }

        fn serialize_unit_variant(
            self,
            _: &'static str,
            _: u32,
            _: &'static str,
        ) -> Result<Self::Ok, Self::Error> {
            Ok($out)
        }

        fn serialize_newtype_variant<V: ?Sized + Serialize>(
            self,
            _: &'static str,
            _: u32,
            _: &'static str,
            _: &V,
        ) -> Result<Self::Ok, Self::Error> {
            Ok($out)
        }
    };
}

/// Classifies one element.
pub(crate) struct RecordShape;

impl Serializer for RecordShape {
    type Ok = Shape;
    type Error = ShapeError;
    type SerializeSeq = Ignore<Shape>;
    type SerializeTuple = Ignore<Shape>;
    type SerializeTupleStruct = Fields;
    type SerializeTupleVariant = Ignore<Shape>;
    type SerializeMap = MapKeys;
    type SerializeStruct = Fields;
    type SerializeStructVariant = Fields;

    scalars!(Shape::Other);

    fn serialize_some<V: ?Sized + Serialize>(self, value: &V) -> Result<Shape, ShapeError> {
        value.serialize(self)
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Shape, ShapeError> {
        Ok(Shape::Record(Vec::new()))
    }

    fn serialize_newtype_struct<V: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &V,
    ) -> Result<Shape, ShapeError> {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, ShapeError> {
        Ok(Ignore(Shape::Other))
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, ShapeError> {
        Ok(Ignore(Shape::Other))
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, ShapeError> {
        Ok(Fields(Vec::with_capacity(len)))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, ShapeError> {
        Ok(Ignore(Shape::Other))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, ShapeError> {
        Ok(MapKeys(Vec::with_capacity(len.unwrap_or(0))))
    }

    fn serialize_struct(self, _: &'static str, len: usize) -> Result<Self::SerializeStruct, ShapeError> {
        Ok(Fields(Vec::with_capacity(len)))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, ShapeError> {
        Ok(Fields(Vec::with_capacity(len)))
    }
}

/// Classifies a whole input: a sequence whose elements go through [`RecordShape`].
pub(crate) struct SequenceShape;

impl Serializer for SequenceShape {
    type Ok = Sequence;
    type Error = ShapeError;
    type SerializeSeq = Elements;
    type SerializeTuple = Elements;
    type SerializeTupleStruct = Ignore<Sequence>;
    type SerializeTupleVariant = Ignore<Sequence>;
    type SerializeMap = Ignore<Sequence>;
    type SerializeStruct = Ignore<Sequence>;
    type SerializeStructVariant = Ignore<Sequence>;

    scalars!(Sequence::NotSequence);

    fn serialize_some<V: ?Sized + Serialize>(self, value: &V) -> Result<Sequence, ShapeError> {
        value.serialize(self)
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Sequence, ShapeError> {
        Ok(Sequence::NotSequence)
    }

    fn serialize_newtype_struct<V: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &V,
    ) -> Result<Sequence, ShapeError> {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, ShapeError> {
        Ok(Elements::default())
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, ShapeError> {
        Ok(Elements::default())
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, ShapeError> {
        Ok(Ignore(Sequence::NotSequence))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, ShapeError> {
        Ok(Ignore(Sequence::NotSequence))
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, ShapeError> {
        Ok(Ignore(Sequence::NotSequence))
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct, ShapeError> {
        Ok(Ignore(Sequence::NotSequence))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, ShapeError> {
        Ok(Ignore(Sequence::NotSequence))
    }
}

/// Element scan for [`SequenceShape`]. Stops classifying after the first
/// non-record.
#[derive(Default)]
pub(crate) struct Elements {
    fields: Option<Vec<String>>,
    mixed: bool,
}

impl Elements {
    fn push<V: ?Sized + Serialize>(&mut self, value: &V) -> Result<(), ShapeError> {
        if self.mixed {
            return Ok(());
        }
        match value.serialize(RecordShape)? {
            Shape::Record(names) => {
                self.fields.get_or_insert(names);
            }
            Shape::Other => self.mixed = true,
        }
        Ok(())
    }

    fn finish(self) -> Sequence {
        if self.mixed {
            Sequence::Mixed
        } else {
            Sequence::Records(self.fields)
        }
    }
}

impl ser::SerializeSeq for Elements {
    type Ok = Sequence;
    type Error = ShapeError;

    fn serialize_element<V: ?Sized + Serialize>(&mut self, value: &V) -> Result<(), ShapeError> {
        self.push(value)
    }

    fn end(self) -> Result<Sequence, ShapeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for Elements {
    type Ok = Sequence;
    type Error = ShapeError;

    fn serialize_element<V: ?Sized + Serialize>(&mut self, value: &V) -> Result<(), ShapeError> {
        self.push(value)
    }

    fn end(self) -> Result<Sequence, ShapeError> {
        Ok(self.finish())
    }
}

/// Field names of a struct-like record. Tuple struct fields are named by
/// position.
pub(crate) struct Fields(Vec<String>);

impl ser::SerializeStruct for Fields {
    type Ok = Shape;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        _: &V,
    ) -> Result<(), ShapeError> {
        self.0.push(key.to_string());
        Ok(())
    }

    fn end(self) -> Result<Shape, ShapeError> {
        Ok(Shape::Record(self.0))
    }
}

impl ser::SerializeStructVariant for Fields {
    type Ok = Shape;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        _: &V,
    ) -> Result<(), ShapeError> {
        self.0.push(key.to_string());
        Ok(())
    }

    fn end(self) -> Result<Shape, ShapeError> {
        Ok(Shape::Record(self.0))
    }
}

impl ser::SerializeTupleStruct for Fields {
    type Ok = Shape;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        self.0.push(self.0.len().to_string());
        Ok(())
    }

    fn end(self) -> Result<Shape, ShapeError> {
        Ok(Shape::Record(self.0))
    }
}

/// Keys of a map record. Only keys that render as a JSON string, number or
/// bool are listed; the map is a record either way.
pub(crate) struct MapKeys(Vec<String>);

impl ser::SerializeMap for MapKeys {
    type Ok = Shape;
    type Error = ShapeError;

    fn serialize_key<K: ?Sized + Serialize>(&mut self, key: &K) -> Result<(), ShapeError> {
        match serde_json::to_value(key) {
            Ok(Value::String(s)) => self.0.push(s),
            Ok(v @ (Value::Number(_) | Value::Bool(_))) => self.0.push(v.to_string()),
            _ => {}
        }
        Ok(())
    }

    fn serialize_value<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<Shape, ShapeError> {
        Ok(Shape::Record(self.0))
    }
}

/// Compound that discards its contents and ends with a fixed answer.
pub(crate) struct Ignore<O>(O);

impl<O> ser::SerializeSeq for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_element<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeTuple for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_element<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeTupleStruct for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeTupleVariant for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeMap for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_key<K: ?Sized + Serialize>(&mut self, _: &K) -> Result<(), ShapeError> {
        Ok(())
    }

    fn serialize_value<V: ?Sized + Serialize>(&mut self, _: &V) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeStruct for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        _: &V,
    ) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

impl<O> ser::SerializeStructVariant for Ignore<O> {
    type Ok = O;
    type Error = ShapeError;

    fn serialize_field<V: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        _: &V,
    ) -> Result<(), ShapeError> {
        Ok(())
    }

    fn end(self) -> Result<O, ShapeError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Pair(i32, i32);

    #[derive(Serialize)]
    enum Event {
        Click { x: i32 },
        Key(char),
        Idle,
    }

    #[test]
    fn test_records() -> Result<(), ShapeError> {
        assert_eq!(Pair(1, 2).serialize(RecordShape)?, Shape::Record(vec!["0".into(), "1".into()]));
        assert_eq!(
            Event::Click { x: 1 }.serialize(RecordShape)?,
            Shape::Record(vec!["x".into()])
        );
        let map = HashMap::from([(7u32, "a")]);
        assert_eq!(map.serialize(RecordShape)?, Shape::Record(vec!["7".into()]));
        let tuple_keys = HashMap::from([((1u8, 2u8), 3u32)]);
        assert_eq!(tuple_keys.serialize(RecordShape)?, Shape::Record(Vec::new()));
        Ok(())
    }

    #[test]
    fn test_non_records() -> Result<(), ShapeError> {
        assert_eq!(Event::Key('k').serialize(RecordShape)?, Shape::Other);
        assert_eq!(Event::Idle.serialize(RecordShape)?, Shape::Other);
        assert_eq!(u128::MAX.serialize(RecordShape)?, Shape::Other);
        assert_eq!((1, "a").serialize(RecordShape)?, Shape::Other);
        assert_eq!(None::<Pair>.serialize(RecordShape)?, Shape::Other);
        Ok(())
    }

    #[test]
    fn test_sequences() -> Result<(), ShapeError> {
        assert_eq!(
            vec![Some(Pair(1, 2))].serialize(SequenceShape)?,
            Sequence::Records(Some(vec!["0".into(), "1".into()]))
        );
        assert_eq!(Vec::<Pair>::new().serialize(SequenceShape)?, Sequence::Records(None));
        assert_eq!(
            vec![Event::Click { x: 1 }, Event::Idle].serialize(SequenceShape)?,
            Sequence::Mixed
        );
        assert_eq!("foo".serialize(SequenceShape)?, Sequence::NotSequence);
        assert_eq!(Pair(1, 2).serialize(SequenceShape)?, Sequence::NotSequence);
        Ok(())
    }
}
