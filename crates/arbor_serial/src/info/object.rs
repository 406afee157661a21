use alloc::boxed::Box;
use core::fmt;
use std::sync::OnceLock;

use crate::info::{FieldInfo, ResolvedField, resolve};
use crate::ops::ObjectType;

/// The annotated fields of one object type.
///
/// Fields are stored in declaration order. The parent level, if any, is the
/// [`ObjectInfo`] of the field marked `#[serial(parent)]`.
///
/// # Examples
///
/// ```
/// use arbor_serial::Serial;
/// use arbor_serial::ops::ObjectType;
///
/// #[derive(Serial, Default)]
/// struct Point {
///     #[serial(order = 1)]
///     x: i32,
///     #[serial(order = 2)]
///     y: i32,
///     cache: u64,
/// }
///
/// let info = Point::object_info();
/// assert_eq!(info.type_name(), "Point");
/// assert_eq!(info.fields().len(), 2);
/// assert_eq!(info.field("y").unwrap().index(), 1);
/// assert!(info.field("cache").is_none());
/// ```
pub struct ObjectInfo {
    type_path: &'static str,
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    parent: Option<&'static ObjectInfo>,
    resolved: OnceLock<Box<[ResolvedField]>>,
}

impl ObjectInfo {
    pub fn new<T: ObjectType>(type_name: &'static str, fields: impl Into<Box<[FieldInfo]>>) -> Self {
        Self {
            type_path: T::type_path(),
            type_name,
            fields: fields.into(),
            parent: None,
            resolved: OnceLock::new(),
        }
    }

    /// Sets the parent level.
    pub fn with_parent<P: ObjectType>(mut self) -> Self {
        self.parent = Some(P::object_info());
        self
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// The type's identifier without module path.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Annotated fields of this level, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Finds a field of this level by its Rust identifier.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    #[inline]
    pub const fn parent(&self) -> Option<&'static ObjectInfo> {
        self.parent
    }

    /// The result of [`resolve`], computed once.
    pub fn resolved(&'static self) -> &'static [ResolvedField] {
        self.resolved
            .get_or_init(|| resolve(self).into_boxed_slice())
    }
}

impl fmt::Debug for ObjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectInfo")
            .field("type_path", &self.type_path)
            .field("fields", &self.fields)
            .field("parent", &self.parent.map(ObjectInfo::type_path))
            .finish()
    }
}
