//! Containers for static storage of [`ObjectInfo`].
//!
//! Used by `#[derive(Serial)]` to implement [`ObjectType::object_info`].
//!
//! - [`NonGenericInfoCell`]: a [`OnceLock`], for non-generic types.
//! - [`GenericInfoCell`]: a [`TypeIdMap`] behind a [`RwLock`], for generic types.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so generic types key their info by [`TypeId`].
//!
//! [`ObjectType::object_info`]: crate::ops::ObjectType::object_info

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use arbor_utils::TypeIdMap;

use crate::info::ObjectInfo;

/// Static storage of a non-generic type's [`ObjectInfo`].
///
/// ## Example
///
/// ```
/// use arbor_serial::impls::NonGenericInfoCell;
/// use arbor_serial::info::{FieldInfo, FieldMeta, ObjectInfo};
/// use arbor_serial::ops::ObjectType;
/// use arbor_serial::Serial;
///
/// #[derive(Serial, Default)]
/// struct Flag {
///     #[serial(order = 1)]
///     on: bool,
/// }
///
/// fn manual_info() -> &'static ObjectInfo {
///     static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///     CELL.get_or_init(|| {
///         ObjectInfo::new::<Flag>("Flag", vec![
///             FieldInfo::new::<bool>("on", 0, FieldMeta::new("on", 1)),
///         ])
///     })
/// }
///
/// assert_eq!(manual_info().fields().len(), Flag::object_info().fields().len());
/// ```
pub struct NonGenericInfoCell(OnceLock<ObjectInfo>);

impl NonGenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init(&'static self, f: impl FnOnce() -> ObjectInfo) -> &'static ObjectInfo {
        self.0.get_or_init(f)
    }
}

/// Static storage of a generic type's [`ObjectInfo`], one per instantiation.
///
/// ## Example
///
/// ```
/// use arbor_serial::Serial;
/// use arbor_serial::ops::ObjectType;
///
/// #[derive(Serial, Default)]
/// struct Slot<T: arbor_serial::SerialType> {
///     #[serial(order = 1)]
///     item: Option<T>,
/// }
///
/// let a = Slot::<i32>::object_info();
/// let b = Slot::<String>::object_info();
///
/// assert!(!core::ptr::eq(a, b));
/// assert!(core::ptr::eq(a, Slot::<i32>::object_info()));
/// ```
pub struct GenericInfoCell(RwLock<TypeIdMap<&'static ObjectInfo>>);

impl GenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(
        &'static self,
        f: impl FnOnce() -> ObjectInfo,
    ) -> &'static ObjectInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &'static self,
        type_id: TypeId,
        f: impl FnOnce() -> ObjectInfo,
    ) -> &'static ObjectInfo {
        let found = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match found {
            Some(info) => info,
            // Built outside the lock, `f` may need the info of other instantiations.
            None => {
                let info = f();
                *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(type_id, || Box::leak(Box::new(info)))
            }
        }
    }
}
