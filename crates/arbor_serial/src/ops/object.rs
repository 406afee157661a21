use crate::SerialType;
use crate::info::ObjectInfo;
use crate::ops::Serial;

/// A struct with annotated fields.
///
/// Fields are addressed by their index in [`ObjectInfo::fields`]. Fields of
/// parent levels are reached through [`parent`](Object::parent).
pub trait Object: Serial {
    fn serial_object_info(&self) -> &'static ObjectInfo;

    fn field_at(&self, index: usize) -> Option<&dyn Serial>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Serial>;

    /// The `#[serial(parent)]` field.
    fn parent(&self) -> Option<&dyn Object>;

    fn parent_mut(&mut self) -> Option<&mut dyn Object>;
}

/// Static side of [`Object`].
///
/// `Default` is the zero-argument constructor used to create deserialization targets.
pub trait ObjectType: Object + SerialType + Default {
    fn object_info() -> &'static ObjectInfo;
}
