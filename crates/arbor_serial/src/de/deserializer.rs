use alloc::borrow::ToOwned;
use alloc::string::ToString;

use crate::info::{FieldMeta, Shape};
use crate::ops::{Collection, MapValue, Object, Sequence, SerialMut};
use crate::ser::DEFAULT_MAX_DEPTH;
use crate::{ErrorKind, Mapping, Serial, SerialError, SerialType, Value};

/// Builds values from [`Value`] trees.
///
/// The walk mirrors [`TreeSerializer`](crate::TreeSerializer):
///
/// - `Null` resets the slot: `None`, the default value or an empty container.
/// - Objects are reset to their default, then every annotated field whose key
///   is present is filled. Missing keys leave the default in place.
/// - Collections and maps are cleared and refilled in source order.
/// - Arrays are filled in place, key `n` goes to slot `n - 1`.
/// - Enum names match case-insensitively.
/// - Interfaces are created from the field's implementation hint.
///
/// # Examples
///
/// ```
/// use arbor_serial::{Mapping, Serial, TreeDeserializer, Value};
///
/// #[derive(Serial, Default, Debug, PartialEq)]
/// struct Point {
///     #[serial(order = 1)]
///     x: i32,
///     #[serial(order = 2)]
///     y: i32,
/// }
///
/// let mut tree = Mapping::new();
/// tree.insert("x", 3);
/// tree.insert("y", 4);
///
/// let point: Point = TreeDeserializer::new().deserialize(&Value::Mapping(tree)).unwrap();
/// assert_eq!(point, Point { x: 3, y: 4 });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeDeserializer {
    max_depth: usize,
    strict_bounds: bool,
}

impl Default for TreeDeserializer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TreeDeserializer {
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_bounds: false,
        }
    }

    /// Sets the nesting limit, [`DEFAULT_MAX_DEPTH`] by default.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Fails with [`ErrorKind::IndexOutOfRange`] on array keys past the end.
    ///
    /// Off by default, such keys are dropped with a warning.
    #[inline]
    pub const fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub const fn strict_bounds(&self) -> bool {
        self.strict_bounds
    }

    /// Creates a `T` and fills it from `value`.
    ///
    /// Interfaces cannot be created without a hint and are rejected with
    /// [`ErrorKind::InvalidTargetType`].
    pub fn deserialize<T: SerialType>(&self, value: &Value) -> Result<T, SerialError> {
        if T::SHAPE == Shape::Interface {
            return Err(ErrorKind::InvalidTargetType {
                type_path: T::type_path().to_owned(),
                reason: "interfaces have no constructor",
            }
            .into());
        }

        let mut target = T::new_slot(&FieldMeta::ROOT)?;
        self.fill(&mut target, value, &FieldMeta::ROOT, 0)?;
        Ok(target)
    }

    /// Fills an existing `target` from `value`.
    ///
    /// Containers inside `target` must already exist, see
    /// [`ErrorKind::UninitializedContainer`].
    pub fn deserialize_into(&self, target: &mut dyn Serial, value: &Value) -> Result<(), SerialError> {
        self.fill(target, value, &FieldMeta::ROOT, 0)
    }

    fn fill(
        &self,
        slot: &mut dyn Serial,
        value: &Value,
        meta: &FieldMeta,
        depth: usize,
    ) -> Result<(), SerialError> {
        if depth > self.max_depth {
            return Err(ErrorKind::RecursionLimit {
                limit: self.max_depth,
            }
            .into());
        }

        if value.is_null() {
            slot.serial_reset();
            return Ok(());
        }

        let type_path = slot.serial_type_path();

        if let Some(hook) = meta.converter()
            && !slot.serial_shape().is_sequence()
        {
            let converted = hook.deserialize(value)?;
            return slot.serial_assign(converted).map_err(|_| {
                SerialError::from(ErrorKind::TypeMismatch {
                    expected: type_path,
                    found: hook.target(),
                })
            });
        }

        match slot.serial_mut() {
            SerialMut::Optional(optional) => {
                if optional.is_none() && optional.inner_shape().is_container() {
                    return Err(ErrorKind::UninitializedContainer { type_path }.into());
                }
                let inner = optional.get_or_insert_slot(meta)?;
                self.fill(inner, value, meta, depth)
            }
            SerialMut::Scalar(scalar) => {
                let found = value.as_scalar().ok_or_else(|| mismatch(type_path, value))?;
                scalar.set_scalar(found)?;
                Ok(())
            }
            SerialMut::Enum(variant) => {
                let found = value.as_scalar().ok_or_else(|| mismatch(type_path, value))?;
                let name = found.to_key_string().to_uppercase();
                if variant.set_variant_name(&name) {
                    Ok(())
                } else {
                    Err(ErrorKind::UnknownEnumValue {
                        type_path,
                        name,
                        expected: variant.variant_names(),
                    }
                    .into())
                }
            }
            SerialMut::Array(array) => {
                let mapping = value.as_mapping().ok_or_else(|| mismatch(type_path, value))?;
                self.fill_array(array, type_path, mapping, meta, depth)
            }
            SerialMut::Collection(collection) => {
                let mapping = value.as_mapping().ok_or_else(|| mismatch(type_path, value))?;
                self.fill_collection(collection, mapping, meta, depth)
            }
            SerialMut::Map(map) => {
                let mapping = value.as_mapping().ok_or_else(|| mismatch(type_path, value))?;
                self.fill_map(map, mapping, meta, depth)
            }
            SerialMut::Object(object) => {
                let mapping = value.as_mapping().ok_or_else(|| mismatch(type_path, value))?;
                object.serial_reset();
                self.fill_object(object, mapping, depth)
            }
            SerialMut::Interface(slot) => {
                let mapping = value.as_mapping().ok_or_else(|| mismatch(type_path, value))?;
                let implementation = meta
                    .implementation()
                    .ok_or(ErrorKind::MissingImplementation { type_path })?;
                let object = slot.instantiate(implementation)?;
                self.fill_object(object, mapping, depth)
            }
        }
    }

    fn fill_array(
        &self,
        array: &mut dyn Sequence,
        type_path: &'static str,
        mapping: &Mapping,
        meta: &FieldMeta,
        depth: usize,
    ) -> Result<(), SerialError> {
        let len = array.len();
        for (key, item) in mapping {
            let index = parse_index(key)?;
            match array.get_mut(index - 1) {
                Some(element) => self
                    .fill(element, item, meta, depth + 1)
                    .map_err(|e| e.within(key))?,
                None if self.strict_bounds => {
                    return Err(SerialError::from(ErrorKind::IndexOutOfRange { index, len }));
                }
                None => {
                    log::warn!("dropping index {index} of `{type_path}`, it holds {len} elements");
                }
            }
        }
        Ok(())
    }

    fn fill_collection(
        &self,
        collection: &mut dyn Collection,
        mapping: &Mapping,
        meta: &FieldMeta,
        depth: usize,
    ) -> Result<(), SerialError> {
        let converter = meta
            .converter()
            .filter(|_| !collection.element_shape().is_sequence());

        collection.clear();
        for (key, item) in mapping {
            parse_index(key)?;
            let pushed = match converter {
                Some(hook) if !item.is_null() => hook
                    .deserialize(item)
                    .map_err(SerialError::from)
                    .and_then(|element| collection.push_any(element, meta)),
                _ => collection
                    .push_slot(meta)
                    .and_then(|element| self.fill(element, item, meta, depth + 1)),
            };
            pushed.map_err(|e| e.within(key))?;
        }
        Ok(())
    }

    fn fill_map(
        &self,
        map: &mut dyn MapValue,
        mapping: &Mapping,
        meta: &FieldMeta,
        depth: usize,
    ) -> Result<(), SerialError> {
        if !map.key_shape().is_keyable() {
            return Err(ErrorKind::InvalidKeyType {
                type_path: map.key_type_path(),
            }
            .into());
        }

        map.clear();
        for (key, item) in mapping {
            map.insert_slot(key, meta)
                .and_then(|entry| self.fill(entry, item, meta, depth + 1))
                .map_err(|e| e.within(key))?;
        }
        Ok(())
    }

    fn fill_object(
        &self,
        object: &mut dyn Object,
        mapping: &Mapping,
        depth: usize,
    ) -> Result<(), SerialError> {
        let info = object.serial_object_info();
        log::trace!("deserializing `{}`", info.type_path());

        for field in info.resolved() {
            let Some(item) = mapping.get(field.key()) else {
                continue;
            };
            let Some(slot) = field.get_mut(object) else {
                continue;
            };
            self.fill(slot, item, field.meta(), depth + 1)
                .map_err(|e| e.within(field.key()))?;
        }
        Ok(())
    }
}

fn mismatch(expected: &'static str, found: &Value) -> SerialError {
    ErrorKind::TypeMismatch {
        expected,
        found: found.kind_name(),
    }
    .into()
}

/// Parses a 1-based position key.
fn parse_index(key: &str) -> Result<usize, SerialError> {
    match key.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(ErrorKind::InvalidIndexKey {
            key: key.to_string(),
        }
        .into()),
    }
}

/// Deserializes a `T` with the default [`TreeDeserializer`].
#[inline]
pub fn from_tree<T: SerialType>(value: &Value) -> Result<T, SerialError> {
    TreeDeserializer::new().deserialize(value)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{TreeDeserializer, from_tree};
    use crate::convert::Converter;
    use crate::{BoxedError, ErrorKind, Mapping, Serial, Value, interface, to_tree};

    #[derive(Serial, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
    enum Direction {
        #[default]
        North,
        East,
        SouthWest,
    }

    #[derive(Serial, Default, Debug, PartialEq)]
    struct Point {
        #[serial(order = 1)]
        x: i32,
        #[serial(order = 2)]
        y: i32,
    }

    #[derive(Serial, Debug, PartialEq)]
    struct Board {
        #[serial(order = 1)]
        facing: Direction,
        #[serial(order = 2)]
        slots: [i32; 3],
        #[serial(order = 3)]
        tags: Vec<String>,
        #[serial(order = 4)]
        named: BTreeMap<String, Point>,
        #[serial(order = 5)]
        extra: Option<Vec<i32>>,
    }

    impl Default for Board {
        fn default() -> Self {
            Self {
                facing: Direction::North,
                slots: [0; 3],
                tags: vec![String::from("default")],
                named: BTreeMap::new(),
                extra: None,
            }
        }
    }

    #[interface]
    trait Animal: Send + Sync {
        fn sound(&self) -> String;
    }

    #[derive(Serial, Default)]
    struct Dog {
        #[serial(order = 1)]
        name: String,
    }

    impl Animal for Dog {
        fn sound(&self) -> String {
            format!("{} barks", self.name)
        }
    }

    #[derive(Serial, Default)]
    struct Kennel {
        #[serial(order = 1, implementation = Dog)]
        resident: Option<Box<dyn Animal>>,
        #[serial(order = 2, implementation = Dog)]
        guests: Vec<Box<dyn Animal>>,
    }

    #[derive(Serial, Default)]
    struct Stray {
        #[serial(order = 1)]
        animal: Option<Box<dyn Animal>>,
    }

    #[derive(Serial, Default)]
    struct Pound {
        #[serial(order = 1)]
        cages: BTreeMap<String, Box<dyn Animal>>,
    }

    #[derive(Serial, Default)]
    struct Shelter {
        #[serial(order = 1, implementation = Dog)]
        cages: BTreeMap<String, Box<dyn Animal>>,
        #[serial(order = 2, implementation = Dog)]
        reserved: BTreeMap<String, Option<Box<dyn Animal>>>,
    }

    #[derive(Default)]
    struct Hex;

    impl Converter<u32> for Hex {
        fn on_serialization(&self, value: &u32) -> Result<Value, BoxedError> {
            Ok(Value::from(format!("#{value:06X}")))
        }

        fn on_deserialization(&self, value: &Value) -> Result<u32, BoxedError> {
            let text = value
                .as_scalar()
                .and_then(|s| s.as_text())
                .ok_or("expected text")?;
            Ok(u32::from_str_radix(text.trim_start_matches('#'), 16)?)
        }
    }

    #[derive(Serial, Default, Debug, PartialEq)]
    struct Palette {
        #[serial(order = 1, converter = Hex)]
        colors: Vec<u32>,
        #[serial(order = 2, converter = Hex)]
        main: Option<u32>,
    }

    fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Value {
        let mut mapping = Mapping::new();
        for (key, value) in entries {
            mapping.insert(key, value);
        }
        Value::Mapping(mapping)
    }

    #[test]
    fn builds_point_from_mapping() {
        let tree = mapping([("x", Value::from(3)), ("y", Value::from(4))]);

        assert_eq!(from_tree::<Point>(&tree).unwrap(), Point { x: 3, y: 4 });
    }

    #[test]
    fn builds_list_from_indexed_mapping() {
        let tree = Value::Mapping(Mapping::indexed(["a", "b"]));

        assert_eq!(from_tree::<Vec<String>>(&tree).unwrap(), ["a", "b"]);
    }

    #[test]
    fn round_trips_nested_values() {
        let board = Board {
            facing: Direction::SouthWest,
            slots: [1, 2, 3],
            tags: vec![String::from("x"), String::from("y")],
            named: BTreeMap::from([(String::from("home"), Point { x: 1, y: -1 })]),
            extra: None,
        };

        let tree = to_tree(&board).unwrap();
        assert_eq!(from_tree::<Board>(&tree).unwrap(), board);
        assert_eq!(to_tree(&from_tree::<Board>(&tree).unwrap()).unwrap(), tree);
    }

    #[test]
    fn enum_names_ignore_case() {
        let tree = mapping([("facing", Value::from("north"))]);
        assert_eq!(from_tree::<Board>(&tree).unwrap().facing, Direction::North);

        let tree = mapping([("facing", Value::from("south_west"))]);
        assert_eq!(from_tree::<Board>(&tree).unwrap().facing, Direction::SouthWest);

        let tree = mapping([("facing", Value::from("up"))]);
        let err = from_tree::<Board>(&tree).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownEnumValue { name, .. } if name == "UP"));
        assert_eq!(err.path(), ["facing"]);
    }

    #[test]
    fn collections_are_replaced() {
        let tree = mapping([("tags", Value::Mapping(Mapping::indexed(["new"])))]);
        assert_eq!(from_tree::<Board>(&tree).unwrap().tags, ["new"]);

        let tree = mapping([("tags", Value::Null)]);
        assert!(from_tree::<Board>(&tree).unwrap().tags.is_empty());

        let tree = mapping([]);
        assert_eq!(from_tree::<Board>(&tree).unwrap().tags, ["default"]);
    }

    #[test]
    fn array_keys_are_one_based() {
        let slots = mapping([("3", Value::from(30)), ("1", Value::from(10))]);
        let tree = mapping([("slots", slots)]);

        assert_eq!(from_tree::<Board>(&tree).unwrap().slots, [10, 0, 30]);
    }

    #[test]
    fn out_of_range_array_keys() {
        let slots = mapping([("1", Value::from(1)), ("4", Value::from(4))]);
        let tree = mapping([("slots", slots)]);

        assert_eq!(from_tree::<Board>(&tree).unwrap().slots, [1, 0, 0]);

        let err = TreeDeserializer::new()
            .with_strict_bounds(true)
            .deserialize::<Board>(&tree)
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::IndexOutOfRange { index: 4, len: 3 }));
        assert_eq!(err.path(), ["slots"]);
    }

    #[test]
    fn rejects_invalid_index_keys() {
        for key in ["0", "first", "-1"] {
            let tree = mapping([("tags", mapping([(key, Value::from("a"))]))]);
            let err = from_tree::<Board>(&tree).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::InvalidIndexKey { key: found } if found == key));
        }
    }

    #[test]
    fn absent_containers_cannot_be_filled() {
        let tree = mapping([("extra", Value::Mapping(Mapping::indexed([1])))]);
        let err = from_tree::<Board>(&tree).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::UninitializedContainer { .. }));
        assert_eq!(err.path(), ["extra"]);
    }

    #[test]
    fn scalar_kinds_must_fit() {
        let tree = mapping([("x", Value::from("three"))]);
        let err = from_tree::<Point>(&tree).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { found: "text", .. }));
        assert_eq!(err.path(), ["x"]);
    }

    #[test]
    fn interfaces_are_not_targets() {
        let err = from_tree::<Box<dyn Animal>>(&mapping([])).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::InvalidTargetType { .. }));
    }

    #[test]
    fn interfaces_need_an_implementation() {
        let tree = mapping([("animal", mapping([("name", Value::from("rex"))]))]);
        let err = from_tree::<Stray>(&tree).err().unwrap();

        assert!(matches!(err.kind(), ErrorKind::MissingImplementation { .. }));
        assert_eq!(err.path(), ["animal"]);
    }

    #[test]
    fn interfaces_use_their_implementation() {
        let dog = mapping([("name", Value::from("rex"))]);
        let guests = Value::Mapping(Mapping::indexed([
            mapping([("name", Value::from("fido"))]),
        ]));
        let tree = mapping([("resident", dog), ("guests", guests)]);

        let kennel = from_tree::<Kennel>(&tree).unwrap();
        assert_eq!(kennel.resident.unwrap().sound(), "rex barks");
        assert_eq!(kennel.guests[0].sound(), "fido barks");

        let kennel = Kennel {
            resident: Some(Box::new(Dog {
                name: String::from("max"),
            })),
            guests: Vec::new(),
        };
        let tree = to_tree(&kennel).unwrap();
        assert_eq!(tree.get("resident").and_then(|r| r.get("name")), Some(&Value::from("max")));
    }

    #[test]
    fn converters_apply_per_element() {
        let palette = Palette {
            colors: vec![0xFF8800, 0x00FF00],
            main: Some(0x123456),
        };

        let tree = to_tree(&palette).unwrap();
        assert_eq!(tree.get("colors").and_then(|c| c.get("2")), Some(&Value::from("#00FF00")));
        assert_eq!(tree.get("main"), Some(&Value::from("#123456")));

        assert_eq!(from_tree::<Palette>(&tree).unwrap(), palette);
    }

    #[test]
    fn converter_failures_carry_the_source() {
        let tree = mapping([("main", Value::from("#zz"))]);
        let err = from_tree::<Palette>(&tree).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::Converter { .. }));
        assert_eq!(err.path(), ["main"]);
    }

    #[test]
    fn interface_map_values_need_an_implementation() {
        let tree = mapping([(
            "cages",
            mapping([("rex", mapping([("name", Value::from("Rex"))]))]),
        )]);
        let err = from_tree::<Pound>(&tree).err().unwrap();

        assert!(matches!(err.kind(), ErrorKind::MissingImplementation { .. }));
        assert_eq!(err.path(), ["cages", "rex"]);
    }

    #[test]
    fn interface_map_values_use_their_implementation() {
        let tree = mapping([
            (
                "cages",
                mapping([
                    ("rex", mapping([("name", Value::from("Rex"))])),
                    ("fido", mapping([("name", Value::from("Fido"))])),
                ]),
            ),
            (
                "reserved",
                mapping([
                    ("empty", Value::Null),
                    ("taken", mapping([("name", Value::from("Max"))])),
                ]),
            ),
        ]);
        let shelter = from_tree::<Shelter>(&tree).ok().unwrap();

        let sounds: Vec<_> = shelter.cages.iter().map(|(k, v)| (k.as_str(), v.sound())).collect();
        assert_eq!(sounds, [("fido", String::from("Fido barks")), ("rex", String::from("Rex barks"))]);

        assert!(shelter.reserved["empty"].is_none());
        assert_eq!(
            shelter.reserved["taken"].as_ref().map(|a| a.sound()),
            Some(String::from("Max barks"))
        );
    }

    #[test]
    fn deserialize_into_resets_the_target() {
        let mut point = Point { x: 1, y: 2 };
        let tree = mapping([("y", Value::from(5))]);

        TreeDeserializer::new().deserialize_into(&mut point, &tree).unwrap();
        assert_eq!(point, Point { x: 0, y: 5 });
    }
}
