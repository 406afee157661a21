use alloc::boxed::Box;
use core::any::{Any, type_name};

use crate::convert::Converter;
use crate::ops::Serial;
use crate::{ErrorKind, Value};

/// A type-erased [`Converter`] for one target type.
///
/// Built by `#[derive(Serial)]` from `#[serial(converter = C)]`.
#[derive(Clone, Copy)]
pub struct ConverterHook {
    converter: &'static str,
    target: &'static str,
    serialize: fn(&dyn Serial) -> Result<Value, ErrorKind>,
    deserialize: fn(&Value) -> Result<Box<dyn Any + Send + Sync>, ErrorKind>,
}

impl ConverterHook {
    /// Erases converter `C` working on `T`.
    pub fn of<T: Any + Send + Sync, C: Converter<T>>() -> Self {
        Self {
            converter: type_name::<C>(),
            target: type_name::<T>(),
            serialize: serialize_with::<T, C>,
            deserialize: deserialize_with::<T, C>,
        }
    }

    /// Type name of the converter.
    #[inline]
    pub const fn converter(&self) -> &'static str {
        self.converter
    }

    /// Type name of the converted type.
    #[inline]
    pub const fn target(&self) -> &'static str {
        self.target
    }

    /// Runs the converter on `value`, which must be the target type.
    #[inline]
    pub fn serialize(&self, value: &dyn Serial) -> Result<Value, ErrorKind> {
        (self.serialize)(value)
    }

    /// Runs the converter on `value`, the result is a boxed target value.
    #[inline]
    pub fn deserialize(&self, value: &Value) -> Result<Box<dyn Any + Send + Sync>, ErrorKind> {
        (self.deserialize)(value)
    }
}

fn instantiate<T, C: Converter<T>>() -> Result<C, ErrorKind> {
    C::instantiate().map_err(|source| ErrorKind::ConverterInstantiation {
        converter: type_name::<C>(),
        source,
    })
}

fn serialize_with<T: Any, C: Converter<T>>(value: &dyn Serial) -> Result<Value, ErrorKind> {
    let any: &dyn Any = value;
    let Some(target) = any.downcast_ref::<T>() else {
        return Err(ErrorKind::TypeMismatch {
            expected: type_name::<T>(),
            found: value.serial_type_path(),
        });
    };
    instantiate::<T, C>()?
        .on_serialization(target)
        .map_err(|source| ErrorKind::Converter {
            converter: type_name::<C>(),
            source,
        })
}

fn deserialize_with<T: Any + Send + Sync, C: Converter<T>>(
    value: &Value,
) -> Result<Box<dyn Any + Send + Sync>, ErrorKind> {
    let target = instantiate::<T, C>()?
        .on_deserialization(value)
        .map_err(|source| ErrorKind::Converter {
            converter: type_name::<C>(),
            source,
        })?;
    Ok(Box::new(target))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::convert::{Converter, Instantiate};
    use crate::tree::Mapping;
    use crate::{BoxedError, ErrorKind, Serial, Value, from_tree, to_tree};

    struct Unbuildable;

    impl Instantiate for Unbuildable {
        fn instantiate() -> Result<Self, BoxedError> {
            Err("no".into())
        }
    }

    impl Converter<i32> for Unbuildable {
        fn on_serialization(&self, value: &i32) -> Result<Value, BoxedError> {
            Ok(Value::from(*value))
        }

        fn on_deserialization(&self, _value: &Value) -> Result<i32, BoxedError> {
            Ok(0)
        }
    }

    #[derive(Serial, Default, Debug)]
    struct Gauge {
        #[serial(order = 1, converter = Unbuildable)]
        a: i32,
    }

    fn assert_instantiation_failure(kind: &ErrorKind) {
        let ErrorKind::ConverterInstantiation { converter, source } = kind else {
            panic!("unexpected error kind: {kind}");
        };
        assert!(converter.ends_with("Unbuildable"));
        assert_eq!(source.to_string(), "no");
    }

    #[test]
    fn instantiation_failure_on_serialize() {
        let err = to_tree(&Gauge { a: 7 }).unwrap_err();

        assert_instantiation_failure(err.kind());
        assert_eq!(err.path(), ["a"]);
    }

    #[test]
    fn instantiation_failure_on_deserialize() {
        let mut mapping = Mapping::new();
        mapping.insert("a", Value::from(1));

        let err = from_tree::<Gauge>(&Value::Mapping(mapping)).unwrap_err();

        assert_instantiation_failure(err.kind());
        assert_eq!(err.path(), ["a"]);
    }
}
