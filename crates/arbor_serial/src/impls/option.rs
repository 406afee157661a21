use alloc::boxed::Box;
use core::any::{Any, type_name};

use crate::info::{FieldMeta, Shape};
use crate::ops::{OptionalValue, SerialMut, SerialRef};
use crate::{ErrorKind, Serial, SerialError, SerialType};

impl<T: SerialType> Serial for Option<T> {
    #[inline]
    fn serial_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn serial_shape(&self) -> Shape {
        T::SHAPE
    }

    fn serial_ref(&self) -> SerialRef<'_> {
        match self {
            Some(value) => value.serial_ref(),
            None => SerialRef::Null,
        }
    }

    #[inline]
    fn serial_mut(&mut self) -> SerialMut<'_> {
        SerialMut::Optional(self)
    }

    fn serial_present(&self) -> Option<&dyn Serial> {
        self.as_ref().and_then(|value| value.serial_present())
    }

    #[inline]
    fn serial_reset(&mut self) {
        *self = None;
    }

    fn serial_assign(
        &mut self,
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<(), Box<dyn Any + Send + Sync>> {
        let value = match value.downcast::<Self>() {
            Ok(value) => {
                *self = *value;
                return Ok(());
            }
            Err(value) => value,
        };
        match value.downcast::<T>() {
            Ok(value) => {
                *self = Some(*value);
                Ok(())
            }
            Err(value) => match self {
                Some(inner) => inner.serial_assign(value),
                None => Err(value),
            },
        }
    }
}

impl<T: SerialType> SerialType for Option<T> {
    const SHAPE: Shape = T::SHAPE;
    type Leaf = T::Leaf;
    type Convert = T::Convert;

    #[inline]
    fn type_path() -> &'static str {
        type_name::<Self>()
    }

    #[inline]
    fn new_slot(_: &FieldMeta) -> Result<Self, SerialError> {
        Ok(None)
    }

    fn from_key(key: &str) -> Result<Self, ErrorKind> {
        T::from_key(key).map(Some)
    }
}

impl<T: SerialType> OptionalValue for Option<T> {
    #[inline]
    fn is_none(&self) -> bool {
        Option::is_none(self)
    }

    #[inline]
    fn inner_shape(&self) -> Shape {
        T::SHAPE
    }

    fn get_or_insert_slot(&mut self, meta: &FieldMeta) -> Result<&mut dyn Serial, SerialError> {
        let value = match self.take() {
            Some(value) => value,
            None => T::new_slot(meta)?,
        };
        Ok(self.insert(value))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use crate::info::FieldMeta;
    use crate::ops::{OptionalValue, SerialRef};
    use crate::Serial;

    #[test]
    fn absent_values_read_as_null() {
        let value: Option<i32> = None;
        assert!(matches!(value.serial_ref(), SerialRef::Null));
        assert!(value.serial_present().is_none());

        let nested: Option<Option<i32>> = Some(None);
        assert!(nested.serial_present().is_none());
    }

    #[test]
    fn assign_accepts_inner_type() {
        let mut value: Option<i32> = None;
        value.serial_assign(Box::new(5_i32)).unwrap();
        assert_eq!(value, Some(5));

        assert!(value.serial_assign(Box::new("5")).is_err());
    }

    #[test]
    fn slot_keeps_present_value() {
        let mut value = Some(alloc::vec![1_i32, 2]);
        value.get_or_insert_slot(&FieldMeta::ROOT).unwrap();
        assert_eq!(value.as_deref(), Some(&[1, 2][..]));

        let mut absent: Option<Vec<i32>> = None;
        absent.get_or_insert_slot(&FieldMeta::ROOT).unwrap();
        assert_eq!(absent, Some(Vec::new()));
    }
}
