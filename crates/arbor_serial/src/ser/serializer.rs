use alloc::string::{String, ToString};

use crate::info::FieldMeta;
use crate::ops::{MapValue, Object, Sequence, SerialRef};
use crate::{ErrorKind, Mapping, Serial, SerialError, Value};

/// How many levels of nesting a call walks before it fails with
/// [`ErrorKind::RecursionLimit`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Converts values into [`Value`] trees.
///
/// - Objects become mappings of their annotated fields, ordered by `order`.
///   Absent fields are left out.
/// - Arrays and collections become mappings keyed `"1"`, `"2"`, ...
/// - Maps keep their own iteration order, keys are written in text form.
/// - Enums are written as their upper-case variant name.
/// - A field converter replaces all of the above for the field. On arrays and
///   collections it is applied to each element instead.
///
/// # Examples
///
/// ```
/// use arbor_serial::{Mapping, Serial, TreeSerializer, Value};
///
/// #[derive(Serial, Default)]
/// struct Point {
///     #[serial(order = 1)]
///     x: i32,
///     #[serial(order = 2)]
///     y: i32,
/// }
///
/// let tree = TreeSerializer::new().serialize(&Point { x: 3, y: 4 }).unwrap();
///
/// let mut expected = Mapping::new();
/// expected.insert("x", 3);
/// expected.insert("y", 4);
/// assert_eq!(tree, Value::Mapping(expected));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeSerializer {
    max_depth: usize,
}

impl Default for TreeSerializer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TreeSerializer {
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit, [`DEFAULT_MAX_DEPTH`] by default.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Serializes `value` into a tree.
    ///
    /// An absent root serializes to [`Value::Null`].
    pub fn serialize(&self, value: &dyn Serial) -> Result<Value, SerialError> {
        self.node(value, &FieldMeta::ROOT, 0)
    }

    fn node(&self, value: &dyn Serial, meta: &FieldMeta, depth: usize) -> Result<Value, SerialError> {
        if depth > self.max_depth {
            return Err(ErrorKind::RecursionLimit {
                limit: self.max_depth,
            }
            .into());
        }

        let Some(value) = value.serial_present() else {
            return Ok(Value::Null);
        };

        if let Some(hook) = meta.converter()
            && !value.serial_shape().is_sequence()
        {
            return Ok(hook.serialize(value)?);
        }

        match value.serial_ref() {
            SerialRef::Null => Ok(Value::Null),
            SerialRef::Scalar(scalar) => Ok(Value::Scalar(scalar.to_scalar())),
            SerialRef::Enum(value) => Ok(Value::from(value.variant_name())),
            SerialRef::Array(sequence) => self.sequence(sequence, meta, depth),
            SerialRef::Collection(collection) => self.sequence(collection, meta, depth),
            SerialRef::Map(map) => self.map(map, meta, depth),
            SerialRef::Object(object) => self.object(object, depth),
        }
    }

    fn sequence(
        &self,
        sequence: &dyn Sequence,
        meta: &FieldMeta,
        depth: usize,
    ) -> Result<Value, SerialError> {
        let mut mapping = Mapping::with_capacity(sequence.len());
        for index in 0..sequence.len() {
            let key = (index + 1).to_string();
            let node = match sequence.get(index) {
                Some(element) => self
                    .node(element, meta, depth + 1)
                    .map_err(|e| e.within(&key))?,
                None => Value::Null,
            };
            mapping.insert(key, node);
        }
        Ok(Value::Mapping(mapping))
    }

    fn map(&self, map: &dyn MapValue, meta: &FieldMeta, depth: usize) -> Result<Value, SerialError> {
        let mut mapping = Mapping::with_capacity(map.len());
        for (key, value) in map.iter() {
            let key = map_key(key).ok_or(ErrorKind::InvalidKeyType {
                type_path: map.key_type_path(),
            })?;
            let node = self
                .node(value, meta, depth + 1)
                .map_err(|e| e.within(&key))?;
            mapping.insert(key, node);
        }
        Ok(Value::Mapping(mapping))
    }

    fn object(&self, object: &dyn Object, depth: usize) -> Result<Value, SerialError> {
        let info = object.serial_object_info();
        log::trace!("serializing `{}`", info.type_path());

        let fields = info.resolved();
        let mut mapping = Mapping::with_capacity(fields.len());
        for field in fields {
            let Some(value) = field.get(object) else {
                continue;
            };
            let node = self
                .node(value, field.meta(), depth + 1)
                .map_err(|e| e.within(field.key()))?;
            if !node.is_null() {
                mapping.insert(field.key(), node);
            }
        }
        Ok(Value::Mapping(mapping))
    }
}

/// The text form of a map key, `None` if the key is neither a scalar nor an enum.
fn map_key(key: &dyn Serial) -> Option<String> {
    match key.serial_ref() {
        SerialRef::Scalar(scalar) => Some(scalar.to_scalar().to_key_string()),
        SerialRef::Enum(value) => Some(value.variant_name().to_string()),
        _ => None,
    }
}

/// Serializes `value` with the default [`TreeSerializer`].
#[inline]
pub fn to_tree(value: &dyn Serial) -> Result<Value, SerialError> {
    TreeSerializer::new().serialize(value)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{TreeSerializer, to_tree};
    use crate::{ErrorKind, Mapping, Serial, Value};

    #[derive(Serial, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
    enum Direction {
        #[default]
        North,
        SouthWest,
    }

    #[derive(Serial, Default)]
    struct Point {
        #[serial(order = 1)]
        x: i32,
        #[serial(order = 2)]
        y: i32,
    }

    #[derive(Serial, Default)]
    struct Route {
        #[serial(order = 2)]
        stops: Vec<Point>,
        #[serial(key = "heading", order = 1)]
        direction: Direction,
        #[serial(order = 3)]
        note: Option<String>,
        #[serial(order = 4)]
        weights: BTreeMap<Direction, f64>,
    }

    #[derive(Serial, Default)]
    struct Labeled<T> {
        #[serial(order = 1)]
        label: String,
        #[serial(order = 2)]
        value: T,
    }

    fn point(x: i32, y: i32) -> Value {
        let mut mapping = Mapping::new();
        mapping.insert("x", x);
        mapping.insert("y", y);
        Value::Mapping(mapping)
    }

    #[test]
    fn serializes_lists_as_indexed_mappings() {
        let tree = to_tree(&vec![String::from("a"), String::from("b")]).unwrap();

        let mut expected = Mapping::new();
        expected.insert("1", "a");
        expected.insert("2", "b");
        assert_eq!(tree, Value::Mapping(expected));
    }

    #[test]
    fn serializes_fields_by_order() {
        let route = Route {
            stops: vec![Point { x: 1, y: 2 }],
            direction: Direction::SouthWest,
            note: None,
            weights: BTreeMap::from([(Direction::North, 0.5)]),
        };

        let tree = to_tree(&route).unwrap();
        let mapping = tree.as_mapping().unwrap();

        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["heading", "stops", "weights"]);
        assert_eq!(mapping.get("heading"), Some(&Value::from("SOUTH_WEST")));
        assert_eq!(
            mapping.get("stops"),
            Some(&Value::Mapping(Mapping::indexed([point(1, 2)])))
        );
        assert_eq!(
            mapping.get("weights").and_then(|w| w.get("NORTH")),
            Some(&Value::from(0.5))
        );
    }

    #[test]
    fn absent_elements_stay_in_sequences() {
        let tree = to_tree(&[Some(1_i32), None]).unwrap();
        let mapping = tree.as_mapping().unwrap();

        assert_eq!(mapping.get("1"), Some(&Value::from(1)));
        assert_eq!(mapping.get("2"), Some(&Value::Null));
    }

    #[test]
    fn scalar_keys_use_text_form() {
        let map = BTreeMap::from([(2_i64, true), (10_i64, false)]);
        let tree = to_tree(&map).unwrap();

        let keys: Vec<_> = tree.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, ["2", "10"]);
    }

    #[test]
    fn rejects_composite_keys() {
        let map = BTreeMap::from([(vec![1_i32], 1_i32)]);
        let err = to_tree(&map).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidKeyType { .. }));
    }

    #[test]
    fn stops_at_depth_limit() {
        let nested = vec![vec![vec![1_i32]]];

        assert!(TreeSerializer::new().with_max_depth(3).serialize(&nested).is_ok());

        let err = TreeSerializer::new()
            .with_max_depth(2)
            .serialize(&nested)
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::RecursionLimit { limit: 2 }));
        assert_eq!(err.path(), ["1", "1", "1"]);
    }

    #[test]
    fn absent_root_is_null() {
        let value: Option<Point> = None;
        assert_eq!(to_tree(&value).unwrap(), Value::Null);
    }

    #[test]
    fn generic_objects_get_a_descriptor_per_type() {
        use crate::ops::ObjectType;

        let count = to_tree(&Labeled {
            label: String::from("count"),
            value: 3_i32,
        })
        .unwrap();
        let flag = to_tree(&Labeled {
            label: String::from("flag"),
            value: true,
        })
        .unwrap();

        assert_eq!(count.get("value"), Some(&Value::from(3)));
        assert_eq!(flag.get("value"), Some(&Value::from(true)));
        assert_ne!(
            Labeled::<i32>::object_info().type_path(),
            Labeled::<bool>::object_info().type_path(),
        );
    }
}
