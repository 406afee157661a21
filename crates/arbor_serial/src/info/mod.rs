//! Static descriptions of serializable types.
//!
//! ## Menu
//!
//! - [`Shape`]: the structural category that selects a (de)serialization strategy.
//! - [`FieldMeta`]: declared key, order, converter and implementation hint of a field.
//! - [`FieldInfo`]: a [`FieldMeta`] plus the field's name, position and declared type.
//! - [`ObjectInfo`]: the annotated fields of one type and its parent level.
//! - [`resolve`]: flattens an [`ObjectInfo`] and its parents into [`ResolvedField`]s sorted by order.
//!
//! `ObjectInfo`s are built once per type by `#[derive(Serial)]` and live for
//! the rest of the program.

// -----------------------------------------------------------------------------
// Modules

mod field;
mod object;
mod resolve;
mod shape;

// -----------------------------------------------------------------------------
// Exports

pub use field::{FieldInfo, FieldMeta};
pub use object::ObjectInfo;
pub use resolve::{ResolvedField, resolve};
pub use shape::{Shape, classify};
