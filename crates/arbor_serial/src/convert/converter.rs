use crate::{BoxedError, Value};

/// Custom (de)serialization of values of type `T`.
///
/// A converter declared on a field replaces the shape-based strategy for that
/// field. On array and collection fields it is applied to each element instead.
///
/// A fresh converter is [instantiated](Instantiate) for every value it handles.
pub trait Converter<T>: Instantiate + 'static {
    fn on_serialization(&self, value: &T) -> Result<Value, BoxedError>;

    fn on_deserialization(&self, value: &Value) -> Result<T, BoxedError>;
}

/// Construction of a converter.
///
/// Implemented for every `Default` type. Converters needing fallible setup
/// implement it by hand, a failure is reported as
/// [`ErrorKind::ConverterInstantiation`](crate::ErrorKind::ConverterInstantiation).
pub trait Instantiate: Sized {
    fn instantiate() -> Result<Self, BoxedError>;
}

impl<T: Default> Instantiate for T {
    #[inline]
    fn instantiate() -> Result<Self, BoxedError> {
        Ok(T::default())
    }
}
