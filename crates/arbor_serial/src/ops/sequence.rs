use alloc::boxed::Box;
use core::any::Any;

use crate::SerialError;
use crate::info::{FieldMeta, Shape};
use crate::ops::Serial;

/// Indexed elements, 0-based.
pub trait Sequence {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Serial>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Serial>;

    /// Shape of the element type.
    fn element_shape(&self) -> Shape;
}

/// A growable [`Sequence`].
pub trait Collection: Sequence {
    fn clear(&mut self);

    /// Appends a fresh element and returns it for filling.
    fn push_slot(&mut self, meta: &FieldMeta) -> Result<&mut dyn Serial, SerialError>;

    /// Appends a converted element.
    ///
    /// `value` is either the element type or what the element's
    /// [`serial_assign`](Serial::serial_assign) accepts.
    fn push_any(
        &mut self,
        value: Box<dyn Any + Send + Sync>,
        meta: &FieldMeta,
    ) -> Result<(), SerialError>;
}
