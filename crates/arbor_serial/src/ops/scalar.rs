use crate::{ErrorKind, Scalar};

/// A value stored as a single [`Scalar`].
pub trait ScalarValue {
    fn to_scalar(&self) -> Scalar;

    /// Overwrites the value from `scalar`.
    ///
    /// Numbers convert between widths when the value fits, anything else is
    /// an [`ErrorKind::TypeMismatch`].
    fn set_scalar(&mut self, scalar: &Scalar) -> Result<(), ErrorKind>;
}
