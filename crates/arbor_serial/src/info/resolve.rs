use alloc::vec::Vec;

use crate::info::{FieldInfo, FieldMeta, ObjectInfo};
use crate::ops::{Object, Serial};

/// A field of an object or of one of its parent levels.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedField {
    depth: usize,
    field: &'static FieldInfo,
}

impl ResolvedField {
    /// How many parent hops lead from the object to the level owning the field.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn field(&self) -> &'static FieldInfo {
        self.field
    }

    #[inline]
    pub const fn key(&self) -> &'static str {
        self.field.key()
    }

    #[inline]
    pub const fn order(&self) -> i32 {
        self.field.order()
    }

    #[inline]
    pub const fn meta(&self) -> &'static FieldMeta {
        self.field.meta()
    }

    /// Reads the field from `object`, which must be of the resolved type.
    pub fn get<'a>(&self, object: &'a dyn Object) -> Option<&'a dyn Serial> {
        let mut level = object;
        for _ in 0..self.depth {
            level = level.parent()?;
        }
        level.field_at(self.field.index())
    }

    /// Mutable version of [`get`](Self::get).
    pub fn get_mut<'a>(&self, object: &'a mut dyn Object) -> Option<&'a mut dyn Serial> {
        let mut level = object;
        for _ in 0..self.depth {
            level = level.parent_mut()?;
        }
        level.field_at_mut(self.field.index())
    }
}

/// Collects the annotated fields of `info` and all its parent levels, sorted by order.
///
/// The walk starts at the type itself and moves up through its parents, then
/// the list is sorted by [`FieldMeta::order`]. The sort is stable, so fields
/// with equal orders keep the walk order: own fields first, each level in
/// declaration order.
///
/// A type without annotated fields resolves to an empty list.
///
/// # Examples
///
/// ```
/// use arbor_serial::Serial;
/// use arbor_serial::info::resolve;
/// use arbor_serial::ops::ObjectType;
///
/// #[derive(Serial, Default)]
/// struct Base {
///     #[serial(order = 1)]
///     id: i32,
///     #[serial(order = 3)]
///     name: String,
/// }
///
/// #[derive(Serial, Default)]
/// struct Pet {
///     #[serial(parent)]
///     base: Base,
///     #[serial(order = 2)]
///     age: i32,
/// }
///
/// let keys: Vec<&str> = resolve(Pet::object_info()).iter().map(|f| f.key()).collect();
/// assert_eq!(keys, ["id", "age", "name"]);
/// ```
pub fn resolve(info: &'static ObjectInfo) -> Vec<ResolvedField> {
    let mut fields = Vec::new();
    let mut level = Some(info);
    let mut depth = 0;

    while let Some(current) = level {
        fields.extend(
            current
                .fields()
                .iter()
                .map(|field| ResolvedField { depth, field }),
        );
        level = current.parent();
        depth += 1;
    }

    fields.sort_by_key(ResolvedField::order);
    fields
}
