use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::any::{Any, type_name};

use crate::info::{FieldMeta, Shape};
use crate::ops::{Collection, Sequence, SerialMut, SerialRef};
use crate::{ErrorKind, Serial, SerialError, SerialType};

/// Turns a converter result into an element, through [`Serial::serial_assign`]
/// of a fresh element when it is not the element type itself.
fn into_element<T: SerialType>(
    value: Box<dyn Any + Send + Sync>,
    meta: &FieldMeta,
) -> Result<T, SerialError> {
    match value.downcast::<T>() {
        Ok(element) => Ok(*element),
        Err(value) => {
            let mut element = T::new_slot(meta)?;
            element
                .serial_assign(value)
                .map_err(|_| ErrorKind::TypeMismatch {
                    expected: T::type_path(),
                    found: "a converted value of another type",
                })?;
            Ok(element)
        }
    }
}

// -----------------------------------------------------------------------------
// Arrays

impl<T: SerialType, const N: usize> Serial for [T; N] {
    impl_serial_common!();

    #[inline]
    fn serial_ref(&self) -> SerialRef<'_> {
        SerialRef::Array(self)
    }

    #[inline]
    fn serial_mut(&mut self) -> SerialMut<'_> {
        SerialMut::Array(self)
    }

    fn serial_reset(&mut self) {
        for element in self.iter_mut() {
            element.serial_reset();
        }
    }
}

impl<T: SerialType, const N: usize> SerialType for [T; N] {
    const SHAPE: Shape = Shape::Array;
    type Leaf = T::Leaf;
    type Convert = T::Convert;

    #[inline]
    fn type_path() -> &'static str {
        type_name::<Self>()
    }

    fn new_slot(meta: &FieldMeta) -> Result<Self, SerialError> {
        let elements = (0..N)
            .map(|_| T::new_slot(meta))
            .collect::<Result<Vec<T>, _>>()?;
        <[T; N]>::try_from(elements).map_err(|elements| {
            SerialError::from(ErrorKind::IndexOutOfRange {
                index: elements.len(),
                len: N,
            })
        })
    }
}

impl<T: SerialType, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Serial> {
        self.as_slice().get(index).map(|e| e as &dyn Serial)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Serial> {
        self.as_mut_slice().get_mut(index).map(|e| e as &mut dyn Serial)
    }

    #[inline]
    fn element_shape(&self) -> Shape {
        T::SHAPE
    }
}

// -----------------------------------------------------------------------------
// Collections

macro_rules! impl_collection {
    ($ty:ident, $push:ident) => {
        impl<T: SerialType> Serial for $ty<T> {
            impl_serial_common!();

            #[inline]
            fn serial_ref(&self) -> SerialRef<'_> {
                SerialRef::Collection(self)
            }

            #[inline]
            fn serial_mut(&mut self) -> SerialMut<'_> {
                SerialMut::Collection(self)
            }

            #[inline]
            fn serial_reset(&mut self) {
                $ty::clear(self);
            }
        }

        impl<T: SerialType> SerialType for $ty<T> {
            const SHAPE: Shape = Shape::Collection;
            type Leaf = T::Leaf;
            type Convert = T::Convert;

            #[inline]
            fn type_path() -> &'static str {
                type_name::<Self>()
            }

            #[inline]
            fn new_slot(_: &FieldMeta) -> Result<Self, SerialError> {
                Ok($ty::new())
            }
        }

        impl<T: SerialType> Sequence for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn get(&self, index: usize) -> Option<&dyn Serial> {
                (index < $ty::len(self)).then(|| &self[index] as &dyn Serial)
            }

            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Serial> {
                if index < $ty::len(self) {
                    Some(&mut self[index])
                } else {
                    None
                }
            }

            #[inline]
            fn element_shape(&self) -> Shape {
                T::SHAPE
            }
        }

        impl<T: SerialType> Collection for $ty<T> {
            #[inline]
            fn clear(&mut self) {
                $ty::clear(self);
            }

            fn push_slot(&mut self, meta: &FieldMeta) -> Result<&mut dyn Serial, SerialError> {
                let index = $ty::len(self);
                self.$push(T::new_slot(meta)?);
                Ok(&mut self[index])
            }

            fn push_any(
                &mut self,
                value: Box<dyn Any + Send + Sync>,
                meta: &FieldMeta,
            ) -> Result<(), SerialError> {
                let element = into_element::<T>(value, meta)?;
                self.$push(element);
                Ok(())
            }
        }
    };
}

impl_collection!(Vec, push);
impl_collection!(VecDeque, push_back);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;

    use crate::info::{FieldMeta, Shape};
    use crate::ops::{Collection, Sequence};
    use crate::{Serial, SerialType};

    #[test]
    fn arrays_reset_in_place() {
        let mut value = [3_i32, 4, 5];
        value.serial_reset();
        assert_eq!(value, [0, 0, 0]);

        let fresh = <[Option<i32>; 2]>::new_slot(&FieldMeta::ROOT).unwrap();
        assert_eq!(fresh, [None, None]);
    }

    #[test]
    fn sequences_index_from_zero() {
        let value = vec![String::from("a"), String::from("b")];
        assert_eq!(Sequence::len(&value), 2);
        assert_eq!(Sequence::get(&value, 1).unwrap().serial_type_path(), "alloc::string::String");
        assert!(Sequence::get(&value, 2).is_none());
        assert_eq!(value.element_shape(), Shape::Scalar);
    }

    #[test]
    fn push_any_wraps_into_option_elements() {
        let mut value: VecDeque<Option<u8>> = VecDeque::new();
        value.push_any(Box::new(Some(1_u8)), &FieldMeta::ROOT).unwrap();
        value.push_any(Box::new(2_u8), &FieldMeta::ROOT).unwrap();
        assert_eq!(value, [Some(1), Some(2)]);

        assert!(value.push_any(Box::new(3_i64), &FieldMeta::ROOT).is_err());
    }
}
