//! Tree to value conversion.
//!
//! ## Menu
//!
//! - [`TreeDeserializer`]: configurable driver.
//! - [`from_tree`]: deserializes with the default configuration.

// -----------------------------------------------------------------------------
// Modules

mod deserializer;

// -----------------------------------------------------------------------------
// Exports

pub use deserializer::{TreeDeserializer, from_tree};
