use alloc::string::{String, ToString};
use core::fmt;

/// A leaf of the value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i32),
    Long(i64),
    Double(f64),
    Float(f32),
    Bool(bool),
}

impl Scalar {
    /// A short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns the value as `i64` if it is an integer.
    pub const fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v as i64),
            Self::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as `f64` if it is any numeric kind.
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Int(v) => Some(v as f64),
            Self::Long(v) => Some(v as f64),
            Self::Double(v) => Some(v),
            Self::Float(v) => Some(v as f64),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The textual form used when the scalar becomes a mapping key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_serial::Scalar;
    ///
    /// assert_eq!(Scalar::Int(3).to_key_string(), "3");
    /// assert_eq!(Scalar::Bool(true).to_key_string(), "true");
    /// assert_eq!(Scalar::from("north").to_key_string(), "north");
    /// ```
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Text(v) => v.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Long(v) => fmt::Display::fmt(v, f),
            Self::Double(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Bool(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    String => Text,
    i32 => Int,
    i64 => Long,
    f64 => Double,
    f32 => Float,
    bool => Bool,
}

impl From<&str> for Scalar {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}
