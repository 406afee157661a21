use crate::SerialError;
use crate::info::{FieldMeta, Shape};
use crate::ops::Serial;

/// An `Option`.
pub trait OptionalValue {
    fn is_none(&self) -> bool;

    /// Shape of the wrapped type.
    fn inner_shape(&self) -> Shape;

    /// Returns the present value, or stores a fresh one first.
    fn get_or_insert_slot(&mut self, meta: &FieldMeta) -> Result<&mut dyn Serial, SerialError>;
}
