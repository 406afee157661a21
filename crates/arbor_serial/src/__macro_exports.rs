//! Items referenced by derived code. Not public API.

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted by `#[serial(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    // Only runs if `inventory` works on this platform.
    fn __mark_available(registry: &mut TypeRegistry) {
        registry.auto_registered = true;
    }

    inventory::submit! {
        __AutoRegisterFunc(__mark_available)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}

// -----------------------------------------------------------------------------
// Derived code helpers

pub use alloc::boxed::Box;

use alloc::string::String;

use crate::convert::Implementation;
use crate::{ErrorKind, SerialError, SerialType};

/// Creates the value of an interface slot from its implementation hint.
pub fn create_interface<T: SerialType>(implementation: &Implementation) -> Result<T, SerialError> {
    match implementation.create().downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(ErrorKind::TypeMismatch {
            expected: T::type_path(),
            found: implementation.type_path(),
        }
        .into()),
    }
}

/// Upper-cases a map key so it can be matched against variant names.
#[inline]
pub fn variant_key(key: &str) -> String {
    key.to_uppercase()
}

/// The error of an enum key that names no variant.
///
/// `name` is the key as returned by [`variant_key`].
pub fn unknown_variant(
    type_path: &'static str,
    name: String,
    expected: &'static [&'static str],
) -> ErrorKind {
    ErrorKind::UnknownEnumValue {
        type_path,
        name,
        expected,
    }
}
