//! [`Serial`](crate::Serial) implementations for std and common library types.
//!
//! ## Menu
//!
//! - Scalars: `String`, `bool`, `i8`..`i64`, `u8`..`u32`, `f32`, `f64`.
//! - `Option<T>`: transparent, `None` is an absent value.
//! - Sequences: `[T; N]` (array shape), `Vec<T>` and `VecDeque<T>` (collection shape).
//! - Maps: `BTreeMap`, `HashMap` and `IndexMap`.
//! - [`NonGenericInfoCell`] / [`GenericInfoCell`]: storage used by derived
//!   [`ObjectType`](crate::ops::ObjectType) impls.

// -----------------------------------------------------------------------------
// Common

/// The [`Serial`](crate::Serial) methods that only forward to [`SerialType`](crate::SerialType).
macro_rules! impl_serial_common {
    () => {
        #[inline]
        fn serial_type_path(&self) -> &'static str {
            <Self as $crate::SerialType>::type_path()
        }

        #[inline]
        fn serial_shape(&self) -> $crate::info::Shape {
            <Self as $crate::SerialType>::SHAPE
        }

        #[inline]
        fn serial_present(&self) -> Option<&dyn $crate::Serial> {
            Some(self)
        }

        fn serial_assign(
            &mut self,
            value: ::alloc::boxed::Box<dyn ::core::any::Any + Send + Sync>,
        ) -> Result<(), ::alloc::boxed::Box<dyn ::core::any::Any + Send + Sync>> {
            *self = *value.downcast::<Self>()?;
            Ok(())
        }
    };
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod map;
mod option;
mod scalar;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, NonGenericInfoCell};
