use alloc::boxed::Box;
use core::any::Any;

use crate::info::{FieldMeta, Shape};
use crate::ops::{Collection, EnumValue, InterfaceSlot, MapValue, Object};
use crate::ops::{OptionalValue, ScalarValue, Sequence};
use crate::{ErrorKind, SerialError};

// -----------------------------------------------------------------------------
// Serial

/// A value the engine can walk.
///
/// Methods are prefixed with `serial_` to stay clear of inherent methods of
/// the implementing types.
pub trait Serial: Any + Send + Sync {
    /// Type path of the concrete type, see [`SerialType::type_path`].
    fn serial_type_path(&self) -> &'static str;

    /// Shape of the concrete type, see [`SerialType::SHAPE`].
    fn serial_shape(&self) -> Shape;

    /// Shape-specific read access.
    ///
    /// Only absent optionals return [`SerialRef::Null`].
    fn serial_ref(&self) -> SerialRef<'_>;

    /// Shape-specific write access.
    fn serial_mut(&mut self) -> SerialMut<'_>;

    /// The value without any `Option` around it, `None` when absent.
    fn serial_present(&self) -> Option<&dyn Serial>;

    /// Puts the value back into its empty state.
    ///
    /// Optionals become `None`, containers are emptied (arrays reset each
    /// element) and other values take their default.
    fn serial_reset(&mut self);

    /// Replaces the value with `value` if it holds the same type.
    ///
    /// Optionals also accept their inner type. On mismatch the value is handed back.
    fn serial_assign(
        &mut self,
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<(), Box<dyn Any + Send + Sync>>;
}

// -----------------------------------------------------------------------------
// SerialType

/// Static information of a [`Serial`] type.
pub trait SerialType: Serial + Sized {
    /// The shape selecting the (de)serialization strategy.
    const SHAPE: Shape;

    /// The type found after unwrapping options, sequences and map values.
    ///
    /// Implementation hints are checked against this type.
    type Leaf: SerialType;

    /// The type a field converter works with.
    ///
    /// Options are unwrapped, sequences convert element-wise so they forward
    /// their element's type. Everything else converts as itself.
    type Convert: Any + Send + Sync;

    /// A stable path naming the type.
    fn type_path() -> &'static str;

    /// A fresh value to be filled by the deserializer.
    ///
    /// `meta` is the meta of the field the value belongs to. Interfaces read
    /// their implementation from it.
    fn new_slot(meta: &FieldMeta) -> Result<Self, SerialError>;

    /// Parses a map key.
    ///
    /// Only scalar and enum types accept keys.
    fn from_key(key: &str) -> Result<Self, ErrorKind> {
        let _ = key;
        Err(ErrorKind::InvalidKeyType {
            type_path: Self::type_path(),
        })
    }
}

// -----------------------------------------------------------------------------
// SerialRef / SerialMut

/// Read access to a value, by shape.
pub enum SerialRef<'a> {
    /// An absent optional.
    Null,
    Scalar(&'a dyn ScalarValue),
    Enum(&'a dyn EnumValue),
    Array(&'a dyn Sequence),
    Collection(&'a dyn Collection),
    Map(&'a dyn MapValue),
    /// A derived struct, or the object behind an interface.
    Object(&'a dyn Object),
}

/// Write access to a value, by shape.
pub enum SerialMut<'a> {
    Scalar(&'a mut dyn ScalarValue),
    Enum(&'a mut dyn EnumValue),
    Array(&'a mut dyn Sequence),
    Collection(&'a mut dyn Collection),
    Map(&'a mut dyn MapValue),
    Object(&'a mut dyn Object),
    /// An `Option`, present or not.
    Optional(&'a mut dyn OptionalValue),
    /// A trait object that is replaced on deserialization.
    Interface(&'a mut dyn InterfaceSlot),
}
