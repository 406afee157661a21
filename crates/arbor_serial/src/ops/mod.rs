//! Traits through which the engine reads and writes values.
//!
//! ## Menu
//!
//! - [`Serial`]: object-safe entry point, implemented by every supported type.
//! - [`SerialType`]: static side of [`Serial`] (shape, type path, fresh slots).
//! - [`SerialRef`] / [`SerialMut`]: a value viewed through its shape.
//! - Shape views:
//!     - [`ScalarValue`]
//!     - [`EnumValue`]
//!     - [`Sequence`] and [`Collection`]
//!     - [`MapValue`]
//!     - [`Object`] and [`ObjectType`]
//!     - [`OptionalValue`]
//!     - [`InterfaceSlot`] and [`Implements`]
//!
//! Implementations for std types live in [`impls`](crate::impls), derived
//! types get theirs from `#[derive(Serial)]` and `#[interface]`.

// -----------------------------------------------------------------------------
// Modules

mod enums;
mod interface;
mod map;
mod object;
mod optional;
mod scalar;
mod sequence;
mod serial;

// -----------------------------------------------------------------------------
// Exports

pub use enums::EnumValue;
pub use interface::{Implements, InterfaceSlot};
pub use map::{MapIter, MapValue};
pub use object::{Object, ObjectType};
pub use optional::OptionalValue;
pub use scalar::ScalarValue;
pub use sequence::{Collection, Sequence};
pub use serial::{Serial, SerialMut, SerialRef, SerialType};
