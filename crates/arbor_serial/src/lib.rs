#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate as `arbor_serial`, both in doc tests and in the
// crate's own unit tests, so the crate must also be reachable under that name.
extern crate self as arbor_serial;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod convert;
pub mod de;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod ser;
pub mod tree;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use arbor_serial_derive as derive;
pub use arbor_serial_derive::{Serial, interface};

pub use de::{TreeDeserializer, from_tree};
pub use error::{BoxedError, ErrorKind, SerialError};
pub use ops::{Serial, SerialType};
pub use ser::{TreeSerializer, to_tree};
pub use tree::{Mapping, Scalar, Value};
