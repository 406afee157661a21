//! The value tree exchanged between the engine and a markup codec.
//!
//! ## Menu
//!
//! - [`Value`]: `Null`, a [`Scalar`] or a [`Mapping`].
//! - [`Scalar`]: text, 32/64-bit integers, double, float and boolean.
//! - [`Mapping`]: string keys to values, insertion order is significant.
//!
//! Arrays and collections never appear as native sequences. They are mappings
//! keyed `"1"`, `"2"`, ... (see [`Mapping::indexed`]). When a serde format
//! produces a sequence, [`Value`]'s `Deserialize` impl rewrites it the same way.

// -----------------------------------------------------------------------------
// Modules

mod mapping;
mod scalar;
mod serde_impls;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use mapping::Mapping;
pub use scalar::Scalar;
pub use value::Value;
