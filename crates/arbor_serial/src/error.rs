use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt;

use thiserror::Error;

/// Error type returned by converters and carried as the source of converter failures.
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// ErrorKind

/// What went wrong during a serialize or deserialize call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("`{type_path}` cannot be a deserialization target: {reason}")]
    InvalidTargetType {
        type_path: String,
        reason: &'static str,
    },

    #[error("`{type_path}` is an interface without a declared implementation")]
    MissingImplementation { type_path: &'static str },

    #[error("container `{type_path}` must be initialized before it can be filled")]
    UninitializedContainer { type_path: &'static str },

    #[error("`{type_path}` cannot be a map key, expected a scalar or an enum")]
    InvalidKeyType { type_path: &'static str },

    #[error("`{key}` is not a 1-based index")]
    InvalidIndexKey { key: String },

    #[error("`{name}` is not a variant of `{type_path}`, expected one of {expected:?}")]
    UnknownEnumValue {
        type_path: &'static str,
        name: String,
        expected: &'static [&'static str],
    },

    #[error("converter `{converter}` cannot be instantiated")]
    ConverterInstantiation {
        converter: &'static str,
        #[source]
        source: BoxedError,
    },

    #[error("converter `{converter}` failed")]
    Converter {
        converter: &'static str,
        #[source]
        source: BoxedError,
    },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("nesting exceeds the recursion limit of {limit}")]
    RecursionLimit { limit: usize },
}

// -----------------------------------------------------------------------------
// SerialError

/// An [`ErrorKind`] plus the key path where it was raised.
///
/// The path lists tree keys from the root, e.g. `pets.2.name`.
///
/// # Examples
///
/// ```
/// use arbor_serial::{ErrorKind, SerialError};
///
/// let err = SerialError::from(ErrorKind::InvalidIndexKey { key: "x".into() })
///     .within("2")
///     .within("pets");
///
/// assert_eq!(err.path(), ["pets", "2"]);
/// assert_eq!(err.to_string(), "`x` is not a 1-based index (at `pets.2`)");
/// ```
#[derive(Debug, Error)]
#[error("{kind}{}", DisplayPath(.path))]
pub struct SerialError {
    kind: ErrorKind,
    path: Vec<String>,
}

impl SerialError {
    /// Prepend `key` to the error path.
    ///
    /// Called while unwinding, so the outermost key ends up first.
    pub fn within(mut self, key: &str) -> Self {
        self.path.insert(0, String::from(key));
        self
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl From<ErrorKind> for SerialError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }
}

struct DisplayPath<'a>(&'a [String]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" (at `")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(key)?;
        }
        f.write_str("`)")
    }
}
