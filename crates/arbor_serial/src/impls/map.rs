use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use core::any::type_name;
use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, hash_map};

use indexmap::IndexMap;

use crate::info::{FieldMeta, Shape};
use crate::ops::{MapIter, MapValue, SerialMut, SerialRef};
use crate::{Serial, SerialError, SerialType};

macro_rules! impl_map {
    (
        $ty:ident<K, V $(, $s:ident)?>,
        where K: $($key_bound:path)|+ $(, $s_bound:ident: $($hasher_bound:path)|+)?;
        $($entry:ident)::+
    ) => {
        impl<K, V $(, $s)?> Serial for $ty<K, V $(, $s)?>
        where
            K: SerialType $(+ $key_bound)+,
            V: SerialType,
            $($s_bound: 'static + Send + Sync $(+ $hasher_bound)+,)?
        {
            impl_serial_common!();

            #[inline]
            fn serial_ref(&self) -> SerialRef<'_> {
                SerialRef::Map(self)
            }

            #[inline]
            fn serial_mut(&mut self) -> SerialMut<'_> {
                SerialMut::Map(self)
            }

            #[inline]
            fn serial_reset(&mut self) {
                $ty::clear(self);
            }
        }

        impl<K, V $(, $s)?> SerialType for $ty<K, V $(, $s)?>
        where
            K: SerialType $(+ $key_bound)+,
            V: SerialType,
            $($s_bound: 'static + Send + Sync $(+ $hasher_bound)+,)?
        {
            const SHAPE: Shape = Shape::Map;
            type Leaf = V::Leaf;
            type Convert = Self;

            #[inline]
            fn type_path() -> &'static str {
                type_name::<Self>()
            }

            #[inline]
            fn new_slot(_: &FieldMeta) -> Result<Self, SerialError> {
                Ok(Default::default())
            }
        }

        impl<K, V $(, $s)?> MapValue for $ty<K, V $(, $s)?>
        where
            K: SerialType $(+ $key_bound)+,
            V: SerialType,
            $($s_bound: 'static + Send + Sync $(+ $hasher_bound)+,)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new($ty::iter(self).map(|(k, v)| (k as &dyn Serial, v as &dyn Serial)))
            }

            #[inline]
            fn key_shape(&self) -> Shape {
                K::SHAPE
            }

            #[inline]
            fn key_type_path(&self) -> &'static str {
                K::type_path()
            }

            #[inline]
            fn clear(&mut self) {
                $ty::clear(self);
            }

            fn insert_slot(
                &mut self,
                key: &str,
                meta: &FieldMeta,
            ) -> Result<&mut dyn Serial, SerialError> {
                let key = K::from_key(key)?;
                let slot = V::new_slot(meta)?;
                let value: &mut V = match $ty::entry(self, key) {
                    $($entry)::+::Occupied(mut entry) => {
                        entry.insert(slot);
                        entry.into_mut()
                    }
                    $($entry)::+::Vacant(entry) => entry.insert(slot),
                };
                Ok(value)
            }
        }
    };
}

impl_map!(BTreeMap<K, V>, where K: Ord; btree_map::Entry);
impl_map!(HashMap<K, V, S>, where K: Eq | Hash, S: BuildHasher | Default; hash_map::Entry);
impl_map!(IndexMap<K, V, S>, where K: Eq | Hash, S: BuildHasher | Default; indexmap::map::Entry);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use std::collections::HashMap;

    use indexmap::IndexMap;

    use crate::info::{FieldMeta, Shape};
    use crate::ops::MapValue;
    use crate::{ErrorKind, Serial};

    #[test]
    fn insert_slot_parses_keys() {
        let mut map: BTreeMap<i32, String> = BTreeMap::new();
        MapValue::insert_slot(&mut map, "7", &FieldMeta::ROOT).unwrap();
        assert!(map.contains_key(&7));

        let err = MapValue::insert_slot(&mut map, "seven", &FieldMeta::ROOT).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn insert_slot_replaces_existing_entries() {
        let mut map: HashMap<String, Vec<i32>> = HashMap::new();
        map.insert(String::from("a"), alloc::vec![1, 2]);

        MapValue::insert_slot(&mut map, "a", &FieldMeta::ROOT).unwrap();
        assert_eq!(map["a"], Vec::<i32>::new());
    }

    #[test]
    fn iteration_follows_map_order() {
        let mut map: IndexMap<String, bool> = IndexMap::new();
        map.insert(String::from("z"), true);
        map.insert(String::from("a"), false);

        let keys: Vec<_> = MapValue::iter(&map)
            .map(|(k, _)| k.serial_type_path())
            .collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(map.key_shape(), Shape::Scalar);
        assert_eq!(map.serial_shape(), Shape::Map);
    }

    #[test]
    fn non_scalar_keys_are_rejected() {
        let mut map: BTreeMap<Vec<i32>, i32> = BTreeMap::new();
        let err = MapValue::insert_slot(&mut map, "1", &FieldMeta::ROOT).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::InvalidKeyType { .. }));
    }

    #[derive(Serial, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Drink {
        #[serial(rename = "café")]
        Coffee,
        IcedTea,
    }

    #[test]
    fn enum_keys_match_upper_cased() {
        let mut map: BTreeMap<Drink, i32> = BTreeMap::new();
        for key in ["café", "CAFÉ", "Café", "iced_tea"] {
            MapValue::insert_slot(&mut map, key, &FieldMeta::ROOT).unwrap();
        }
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [Drink::Coffee, Drink::IcedTea]);

        let err = MapValue::insert_slot(&mut map, "cafe", &FieldMeta::ROOT).err().unwrap();
        let ErrorKind::UnknownEnumValue { name, .. } = err.kind() else {
            panic!("unexpected error kind: {}", err.kind());
        };
        assert_eq!(name, "CAFE");
    }
}
