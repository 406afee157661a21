use alloc::string::String;
use core::any::type_name;

use crate::info::{FieldMeta, Shape};
use crate::ops::{ScalarValue, SerialMut, SerialRef};
use crate::{ErrorKind, Scalar, Serial, SerialError, SerialType};

fn mismatch<T>(found: &Scalar) -> ErrorKind {
    ErrorKind::TypeMismatch {
        expected: type_name::<T>(),
        found: found.kind_name(),
    }
}

fn unparsable<T>() -> ErrorKind {
    ErrorKind::TypeMismatch {
        expected: type_name::<T>(),
        found: "text",
    }
}

macro_rules! impl_scalar_type {
    ($ty:ty) => {
        impl Serial for $ty {
            impl_serial_common!();

            #[inline]
            fn serial_ref(&self) -> SerialRef<'_> {
                SerialRef::Scalar(self)
            }

            #[inline]
            fn serial_mut(&mut self) -> SerialMut<'_> {
                SerialMut::Scalar(self)
            }

            #[inline]
            fn serial_reset(&mut self) {
                *self = Default::default();
            }
        }

        impl SerialType for $ty {
            const SHAPE: Shape = Shape::Scalar;
            type Leaf = Self;
            type Convert = Self;

            #[inline]
            fn type_path() -> &'static str {
                type_name::<Self>()
            }

            #[inline]
            fn new_slot(_: &FieldMeta) -> Result<Self, SerialError> {
                Ok(Default::default())
            }

            fn from_key(key: &str) -> Result<Self, ErrorKind> {
                key.parse::<$ty>().map_err(|_| unparsable::<$ty>())
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident($repr:ty)),* $(,)?) => {$(
        impl_scalar_type!($ty);

        impl ScalarValue for $ty {
            #[inline]
            fn to_scalar(&self) -> Scalar {
                Scalar::$variant(<$repr>::from(*self))
            }

            fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind> {
                let value = scalar.as_integer().ok_or_else(|| mismatch::<$ty>(scalar))?;
                *self = <$ty>::try_from(value).map_err(|_| mismatch::<$ty>(scalar))?;
                Ok(())
            }
        }
    )*};
}

impl_integer! {
    i8 => Int(i32),
    i16 => Int(i32),
    i32 => Int(i32),
    u8 => Int(i32),
    u16 => Int(i32),
    i64 => Long(i64),
    u32 => Long(i64),
}

// -----------------------------------------------------------------------------
// Floats

impl_scalar_type!(f32);
impl_scalar_type!(f64);

impl ScalarValue for f32 {
    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Float(*self)
    }

    fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind> {
        let value = scalar.as_number().ok_or_else(|| mismatch::<f32>(scalar))?;
        *self = value as f32;
        Ok(())
    }
}

impl ScalarValue for f64 {
    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Double(*self)
    }

    fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind> {
        *self = scalar.as_number().ok_or_else(|| mismatch::<f64>(scalar))?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Bool

impl_scalar_type!(bool);

impl ScalarValue for bool {
    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Bool(*self)
    }

    fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind> {
        *self = scalar.as_bool().ok_or_else(|| mismatch::<bool>(scalar))?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// String

impl_scalar_type!(String);

impl ScalarValue for String {
    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }

    /// Accepts any scalar, numbers and booleans are stored in their text form.
    fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind> {
        *self = scalar.to_key_string();
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::ops::ScalarValue;
    use crate::{ErrorKind, Scalar, SerialType};

    #[test]
    fn integers_convert_when_in_range() {
        let mut value = 0_u8;
        value.set_scalar(&Scalar::Long(200)).unwrap();
        assert_eq!(value, 200);

        let err = value.set_scalar(&Scalar::Int(-1)).unwrap_err();
        assert!(matches!(err, ErrorKind::TypeMismatch { expected: "u8", found: "int" }));

        assert_eq!(7_u32.to_scalar(), Scalar::Long(7));
        assert_eq!((-3_i16).to_scalar(), Scalar::Int(-3));
    }

    #[test]
    fn floats_accept_any_number() {
        let mut value = 0.0_f64;
        value.set_scalar(&Scalar::Int(4)).unwrap();
        assert_eq!(value, 4.0);

        assert!(value.set_scalar(&Scalar::Bool(true)).is_err());
    }

    #[test]
    fn strings_accept_any_scalar() {
        let mut value = String::new();
        value.set_scalar(&Scalar::Bool(true)).unwrap();
        assert_eq!(value, "true");

        value.set_scalar(&Scalar::Int(12)).unwrap();
        assert_eq!(value, "12");
    }

    #[test]
    fn keys_parse_into_scalars() {
        assert_eq!(i32::from_key("-5").unwrap(), -5);
        assert_eq!(String::from_key("a b").unwrap(), "a b");
        assert!(matches!(
            u8::from_key("x"),
            Err(ErrorKind::TypeMismatch { found: "text", .. })
        ));
    }
}
