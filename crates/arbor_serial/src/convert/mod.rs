//! Field-level extension points.
//!
//! ## Menu
//!
//! - [`Converter`]: takes over (de)serialization of a field.
//! - [`Instantiate`]: how a converter is constructed, once per use.
//! - [`ConverterHook`]: a type-erased converter stored in [`FieldMeta`](crate::info::FieldMeta).
//! - [`Implementation`]: a factory for the concrete type behind an interface field.
//!
//! Both are declared on fields:
//!
//! ```
//! use arbor_serial::{BoxedError, Serial, Value, to_tree};
//! use arbor_serial::convert::Converter;
//!
//! #[derive(Default)]
//! struct Hex;
//!
//! impl Converter<u32> for Hex {
//!     fn on_serialization(&self, value: &u32) -> Result<Value, BoxedError> {
//!         Ok(Value::from(format!("#{value:06X}")))
//!     }
//!
//!     fn on_deserialization(&self, value: &Value) -> Result<u32, BoxedError> {
//!         let text = value.as_scalar().and_then(|s| s.as_text()).ok_or("expected text")?;
//!         Ok(u32::from_str_radix(text.trim_start_matches('#'), 16)?)
//!     }
//! }
//!
//! #[derive(Serial, Default)]
//! struct Skin {
//!     #[serial(order = 1, converter = Hex)]
//!     color: u32,
//! }
//!
//! let tree = to_tree(&Skin { color: 0xFF8800 }).unwrap();
//! assert_eq!(tree.get("color"), Some(&Value::from("#FF8800")));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod converter;
mod hook;
mod implementation;

// -----------------------------------------------------------------------------
// Exports

pub use converter::{Converter, Instantiate};
pub use hook::ConverterHook;
pub use implementation::Implementation;
