//! `serde` support for the value tree.
//!
//! - Serializing a [`Mapping`] skips `Null` entries, so formats never see explicit nulls.
//! - Deserializing accepts native sequences and rewrites them as 1-based mappings.
//! - Non-string mapping keys (e.g. YAML `1:`) are converted to their textual form.
//! - Integers that fit in `i32` become [`Scalar::Int`], larger ones [`Scalar::Long`].

use alloc::string::{String, ToString};
use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Mapping, Scalar, Value};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(v) => serializer.serialize_str(v),
            Self::Int(v) => serializer.serialize_i32(*v),
            Self::Long(v) => serializer.serialize_i64(*v),
            Self::Double(v) => serializer.serialize_f64(*v),
            Self::Float(v) => serializer.serialize_f32(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.iter().filter(|(_, value)| !value.is_null()).count();
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in self.iter() {
            if !value.is_null() {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

fn integer(v: i64) -> Scalar {
    match i32::try_from(v) {
        Ok(v) => Scalar::Int(v),
        Err(_) => Scalar::Long(v),
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar, a mapping or a sequence")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Scalar(integer(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        match i64::try_from(v) {
            Ok(v) => Ok(Value::Scalar(integer(v))),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Float(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Double(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Text(String::from(v))))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Text(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::with_capacity(seq.size_hint().unwrap_or(0));
        let mut index = 1_usize;
        while let Some(value) = seq.next_element::<Value>()? {
            mapping.insert(index.to_string(), value);
            index += 1;
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(Key(key)) = map.next_key::<Key>()? {
            let value = map.next_value::<Value>()?;
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.kind_name()),
                &"a mapping",
            )),
        }
    }
}

/// A mapping key in textual form.
struct Key(String);

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar mapping key")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
        Ok(Key(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key(String::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Mapping, Scalar, Value};

    #[test]
    fn sequence_becomes_indexed_mapping() {
        let value: Value = serde_json::from_str(r#"{"names": ["a", "b"]}"#).unwrap();
        let names = value.get("names").unwrap();

        assert_eq!(names, &Value::from(Mapping::indexed(["a", "b"])));
    }

    #[test]
    fn integer_width() {
        let value: Value = serde_json::from_str(r#"[1, 5000000000, 1.5, true]"#).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert_eq!(mapping.get("1"), Some(&Value::Scalar(Scalar::Int(1))));
        assert_eq!(mapping.get("2"), Some(&Value::Scalar(Scalar::Long(5_000_000_000))));
        assert_eq!(mapping.get("3"), Some(&Value::Scalar(Scalar::Double(1.5))));
        assert_eq!(mapping.get("4"), Some(&Value::Scalar(Scalar::Bool(true))));
    }

    #[test]
    fn null_entries_are_skipped() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", Value::Null);
        mapping.insert("c", "x");

        let text = serde_json::to_string(&mapping).unwrap();
        assert_eq!(text, r#"{"a":1,"c":"x"}"#);
    }

    #[test]
    fn key_order_survives() {
        let text = r#"{"z":1,"a":2,"m":3}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }
}
