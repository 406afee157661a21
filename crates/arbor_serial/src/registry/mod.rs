//! Lookup of object types by name, for callers that only know the type at runtime.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: an [`ObjectInfo`](crate::info::ObjectInfo) plus a factory for fresh instances.
//! - [`GetTypeMeta`]: implemented by `#[derive(Serial)]` on structs.
//! - [`TypeRegistry`]: `TypeMeta`s indexed by [`TypeId`](core::any::TypeId), type path and type name.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! Types marked `#[serial(auto_register)]` are collected with the [`inventory`]
//! crate. Not every platform supports it, on those the call registers nothing
//! and returns `false`.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
