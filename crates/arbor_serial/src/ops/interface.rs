use crate::SerialError;
use crate::convert::Implementation;
use crate::ops::Object;

/// A trait-object slot, `Box<dyn Trait>` for traits marked `#[interface]`.
pub trait InterfaceSlot {
    /// Path of the trait object type.
    fn interface_path(&self) -> &'static str;

    /// Replaces the current object with a fresh one from `implementation`
    /// and returns it for filling.
    fn instantiate(&mut self, implementation: &Implementation)
    -> Result<&mut dyn Object, SerialError>;
}

/// `Self` can be created from the concrete type `C`.
///
/// `#[interface]` implements this for `Box<dyn Trait>` and every
/// `C: Trait + Default`.
pub trait Implements<C>: Sized + Send + Sync + 'static {
    fn create() -> Self;
}
