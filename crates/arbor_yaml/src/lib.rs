#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::io;

use arbor_serial::{Serial, SerialError, SerialType, Value};

// -----------------------------------------------------------------------------
// Error

/// Failure at either side of the boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text is not valid YAML, or could not be written.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    /// The tree does not fit the object.
    #[error(transparent)]
    Serial(#[from] SerialError),
}

// -----------------------------------------------------------------------------
// Value trees

/// Writes a tree as a block-style YAML document.
pub fn value_to_string(value: &Value) -> Result<String, Error> {
    Ok(serde_yaml::to_string(value)?)
}

/// Parses a YAML document into a tree.
pub fn value_from_str(text: &str) -> Result<Value, Error> {
    Ok(serde_yaml::from_str(text)?)
}

// -----------------------------------------------------------------------------
// Objects

/// Serializes `value` to YAML text.
pub fn to_string(value: &dyn Serial) -> Result<String, Error> {
    let tree = arbor_serial::to_tree(value)?;
    value_to_string(&tree)
}

/// Serializes `value` as YAML into `writer`.
pub fn to_writer<W: io::Write>(writer: W, value: &dyn Serial) -> Result<(), Error> {
    let tree = arbor_serial::to_tree(value)?;
    serde_yaml::to_writer(writer, &tree)?;
    Ok(())
}

/// Builds a `T` from YAML text.
pub fn from_str<T: SerialType>(text: &str) -> Result<T, Error> {
    let tree = value_from_str(text)?;
    log::trace!("building `{}` from yaml", T::type_path());
    Ok(arbor_serial::from_tree(&tree)?)
}

/// Builds a `T` from YAML read out of `reader`.
pub fn from_reader<T: SerialType, R: io::Read>(reader: R) -> Result<T, Error> {
    let tree: Value = serde_yaml::from_reader(reader)?;
    log::trace!("building `{}` from yaml", T::type_path());
    Ok(arbor_serial::from_tree(&tree)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use arbor_serial::{ErrorKind, Mapping, Serial, Value};

    use super::{Error, from_reader, from_str, to_string, to_writer, value_from_str, value_to_string};

    #[derive(Serial, Default, Debug, PartialEq, Clone, Copy)]
    enum Mood {
        #[default]
        Happy,
        Grumpy,
    }

    #[derive(Serial, Default, Debug, PartialEq)]
    struct Pet {
        #[serial(order = 1)]
        name: String,
        #[serial(order = 3)]
        mood: Mood,
        #[serial(order = 2)]
        age: i32,
        #[serial(order = 4)]
        toys: Vec<String>,
        #[serial(order = 5)]
        owner: Option<String>,
    }

    #[derive(Serial, Default, Debug, PartialEq)]
    struct Shelter {
        #[serial(order = 1)]
        pets: BTreeMap<String, Pet>,
    }

    fn rex() -> Pet {
        Pet {
            name: String::from("Rex"),
            mood: Mood::Grumpy,
            age: 3,
            toys: vec![String::from("ball"), String::from("rope")],
            owner: None,
        }
    }

    #[test]
    fn writes_fields_in_order_without_nulls() {
        let text = to_string(&rex()).unwrap();

        let name = text.find("name: Rex").unwrap();
        let age = text.find("age: 3").unwrap();
        let mood = text.find("mood: GRUMPY").unwrap();
        let toys = text.find("toys:").unwrap();
        assert!(name < age && age < mood && mood < toys);
        assert!(!text.contains("owner"));
        assert!(!text.contains("null"));
    }

    #[test]
    fn round_trips_through_text() {
        let shelter = Shelter {
            pets: BTreeMap::from([(String::from("rex"), rex())]),
        };

        let text = to_string(&shelter).unwrap();
        assert_eq!(from_str::<Shelter>(&text).unwrap(), shelter);
    }

    #[test]
    fn reads_numeric_keys_and_native_sequences() {
        let numeric = "name: Rex\nage: 3\nmood: happy\ntoys:\n  1: ball\n  2: rope\n";
        let native = "name: Rex\nage: 3\nmood: happy\ntoys:\n  - ball\n  - rope\n";

        let a: Pet = from_str(numeric).unwrap();
        let b: Pet = from_str(native).unwrap();
        assert_eq!(a.mood, Mood::Happy);
        assert_eq!(a.toys, ["ball", "rope"]);
        assert_eq!(a, b);
    }

    #[test]
    fn writer_and_reader_agree() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &rex()).unwrap();

        let pet: Pet = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(pet, rex());
    }

    #[test]
    fn raw_trees() {
        let tree = value_from_str("x: 3\ny: 4\n").unwrap();
        assert_eq!(tree.get("x"), Some(&Value::from(3)));

        let mut mapping = Mapping::new();
        mapping.insert("x", 3);
        mapping.insert("gone", Value::Null);
        assert_eq!(value_to_string(&Value::Mapping(mapping)).unwrap(), "x: 3\n");
    }

    #[test]
    fn reports_both_error_sides() {
        assert!(matches!(from_str::<Pet>("name: [unclosed"), Err(Error::Yaml(_))));

        let Err(Error::Serial(err)) = from_str::<Pet>("mood: sleepy\n") else {
            panic!("expected a serial error");
        };
        assert!(matches!(err.kind(), ErrorKind::UnknownEnumValue { .. }));
        assert_eq!(err.path(), ["mood"]);
    }
}
