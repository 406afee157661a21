use alloc::boxed::Box;

use crate::SerialError;
use crate::info::{FieldMeta, Shape};
use crate::ops::Serial;

/// Iterator over the entries of a [`MapValue`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Serial, &'a dyn Serial)> + 'a>;

/// A keyed map.
pub trait MapValue {
    fn len(&self) -> usize;

    /// Entries in the map's own iteration order.
    fn iter(&self) -> MapIter<'_>;

    /// Shape of the key type.
    fn key_shape(&self) -> Shape;

    fn key_type_path(&self) -> &'static str;

    fn clear(&mut self);

    /// Parses `key`, inserts a fresh value under it and returns the value for filling.
    ///
    /// An existing entry with the same key is replaced.
    fn insert_slot(&mut self, key: &str, meta: &FieldMeta) -> Result<&mut dyn Serial, SerialError>;
}
