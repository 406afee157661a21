//! Value to tree conversion.
//!
//! ## Menu
//!
//! - [`TreeSerializer`]: configurable driver.
//! - [`to_tree`]: serializes with the default configuration.
//! - [`DEFAULT_MAX_DEPTH`]: nesting limit shared with the deserializer.

// -----------------------------------------------------------------------------
// Modules

mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use serializer::{DEFAULT_MAX_DEPTH, TreeSerializer, to_tree};
