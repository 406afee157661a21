//! See following macros:
//!
//! - [`Serial`](derive_serial)
//! - [`interface`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static SERIAL_ATTRIBUTE_NAME: &str = "serial";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Serial Derivation
///
/// `#[derive(Serial)]` implements the following traits:
///
/// - `Serial` and `SerialType`
/// - `Object`, `ObjectType` and `GetTypeMeta` (for `struct T { ... }` and `struct T;`)
/// - `EnumValue` (for fieldless `enum T { ... }`)
///
/// Tuple structs, unions, enums with fields and types with lifetime
/// parameters are rejected.
///
/// ## Fields
///
/// Only fields carrying a `#[serial(...)]` attribute take part. Every other
/// field is left at its `Default` value on deserialization. `order` is required.
///
/// ```rust, ignore
/// #[derive(Serial, Default)]
/// struct Pet {
///     #[serial(order = 1)]
///     name: String,
///     #[serial(order = 2, key = "hunger-level")]
///     hunger: i32,
///     #[serial(order = 3, converter = ColorConverter)]
///     color: Color,
///     #[serial(order = 4, implementation = Dog)]
///     companion: Option<Box<dyn Animal>>,
///     cached_sprite: Vec<u8>,
/// }
/// ```
///
/// - `order = N`: position in the output, lower first. Ties keep declaration order.
/// - `key = "..."`: the tree key, the field name by default.
/// - `converter = C`: `C: Converter<T>` where `T` is the field type with
///   options and sequences unwrapped.
/// - `implementation = C`: the concrete type created for an `#[interface]`
///   value, `C: Trait + Default`.
///
/// The type must implement `Default`, it is how deserialization targets are created.
///
/// ## Parent Types
///
/// A field marked `#[serial(parent)]` contributes its own annotated fields
/// to the output as if they were declared on the struct. The marker
/// cannot be combined with other field attributes and at most one field
/// can carry it.
///
/// ```rust, ignore
/// #[derive(Serial, Default)]
/// struct Base {
///     #[serial(order = 1)]
///     id: i32,
/// }
///
/// #[derive(Serial, Default)]
/// struct Pet {
///     #[serial(parent)]
///     base: Base,
///     #[serial(order = 2)]
///     name: String,
/// }
/// ```
///
/// ## Enums
///
/// Variants are persisted by name in `SCREAMING_SNAKE_CASE`, `NorthEast`
/// becomes `NORTH_EAST`. `#[serial(rename = "...")]` on a variant overrides
/// the name, it is upper-cased as well. New values start at the first variant.
///
/// ## Auto Registration
///
/// `#[serial(auto_register)]` on a struct submits it to the link-time list
/// read by `TypeRegistry::auto_register`. Generic structs are rejected, and
/// the attribute is a no-op when the `auto_register` feature is disabled.
#[proc_macro_derive(Serial, attributes(serial))]
pub fn derive_serial(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_serial_impls(ast)
}

/// Marks a trait as an interface: a field type whose concrete value is
/// picked by an implementation hint on deserialization.
///
/// The trait gains `Object` as a supertrait, so every implementor must
/// derive `Serial`. `Box<dyn Trait>` can then be used as a field type,
/// directly or inside options, sequences and maps.
///
/// ```rust, ignore
/// #[interface]
/// pub trait Animal {
///     fn sound(&self) -> &str;
/// }
///
/// #[derive(Serial, Default)]
/// struct Dog {
///     #[serial(order = 1)]
///     name: String,
/// }
///
/// impl Animal for Dog {
///     fn sound(&self) -> &str { "woof" }
/// }
///
/// #[derive(Serial, Default)]
/// struct Owner {
///     #[serial(order = 1, implementation = Dog)]
///     pet: Option<Box<dyn Animal>>,
/// }
/// ```
///
/// Generic traits are not supported.
#[proc_macro_attribute]
pub fn interface(_args: TokenStream, input: TokenStream) -> TokenStream {
    impls::impl_interface(input)
}
