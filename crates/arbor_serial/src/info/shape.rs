use core::fmt;

use crate::SerialType;

/// The structural category of a type.
///
/// `Option<T>` has the shape of `T`, absence is handled before the shape matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Text, booleans and numbers.
    Scalar,
    /// A fieldless enum, stored as its upper-case variant name.
    Enum,
    /// A fixed-size array, filled in place.
    Array,
    /// A growable ordered collection, cleared and refilled.
    Collection,
    /// A keyed map with scalar or enum keys.
    Map,
    /// A trait object, needs an implementation hint to be deserialized.
    Interface,
    /// A derived struct.
    Object,
}

impl Shape {
    /// `Array` or `Collection`.
    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::Array | Self::Collection)
    }

    /// Shapes that must already exist on the target before they are filled.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Collection | Self::Map)
    }

    /// Shapes allowed as map keys.
    #[inline]
    pub const fn is_keyable(self) -> bool {
        matches!(self, Self::Scalar | Self::Enum)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Collection => "collection",
            Self::Map => "map",
            Self::Interface => "interface",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the shape of a declared type.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use arbor_serial::info::{Shape, classify};
///
/// assert_eq!(classify::<i32>(), Shape::Scalar);
/// assert_eq!(classify::<Option<String>>(), Shape::Scalar);
/// assert_eq!(classify::<[u8; 4]>(), Shape::Array);
/// assert_eq!(classify::<Vec<bool>>(), Shape::Collection);
/// assert_eq!(classify::<BTreeMap<String, f64>>(), Shape::Map);
/// ```
#[inline]
pub const fn classify<T: SerialType>() -> Shape {
    T::SHAPE
}
