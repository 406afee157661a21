use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::info::ObjectInfo;
use crate::ops::{Object, ObjectType};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime record of an object type, stored in a [`TypeRegistry`].
///
/// # Example
///
/// ```
/// use arbor_serial::Serial;
/// use arbor_serial::registry::TypeMeta;
///
/// #[derive(Serial, Default)]
/// struct Collar {
///     #[serial(order = 1)]
///     color: String,
/// }
///
/// let meta = TypeMeta::of::<Collar>();
/// assert_eq!(meta.type_name(), "Collar");
///
/// let fresh = meta.create();
/// assert_eq!(fresh.serial_type_path(), meta.type_path());
/// ```
#[derive(Clone, Copy)]
pub struct TypeMeta {
    type_id: TypeId,
    info: &'static ObjectInfo,
    create: fn() -> Box<dyn Object>,
}

impl TypeMeta {
    #[inline]
    pub fn of<T: ObjectType>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            info: T::object_info(),
            create: create_default::<T>,
        }
    }

    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub const fn info(&self) -> &'static ObjectInfo {
        self.info
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.info.type_name()
    }

    /// A default instance of the type.
    #[inline]
    pub fn create(&self) -> Box<dyn Object> {
        (self.create)()
    }
}

fn create_default<T: ObjectType>() -> Box<dyn Object> {
    Box::new(T::default())
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Provides the [`TypeMeta`] of an object type.
///
/// `#[derive(Serial)]` implements this for structs, registering the
/// `#[serial(parent)]` type as a dependency.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot be registered",
    note = "consider annotating `{Self}` with `#[derive(Serial)]`"
)]
pub trait GetTypeMeta: ObjectType {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    /// Registers other types needed by this type.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
