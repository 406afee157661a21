use core::fmt;

use crate::SerialType;
use crate::convert::{ConverterHook, Implementation};
use crate::info::Shape;

// -----------------------------------------------------------------------------
// FieldMeta

/// Declarative configuration of one field.
///
/// Written as `#[serial(key = "...", order = N, converter = C, implementation = I)]`.
/// `#[derive(Serial)]` builds this for every annotated field.
#[derive(Clone, Copy)]
pub struct FieldMeta {
    key: &'static str,
    order: i32,
    converter: Option<ConverterHook>,
    implementation: Option<Implementation>,
}

impl FieldMeta {
    /// The meta of a value that is not a field, e.g. the root of a call.
    pub const ROOT: FieldMeta = FieldMeta::new("", 0);

    #[inline]
    pub const fn new(key: &'static str, order: i32) -> Self {
        Self {
            key,
            order,
            converter: None,
            implementation: None,
        }
    }

    /// Hands (de)serialization of the field to a converter.
    #[inline]
    pub const fn with_converter(mut self, converter: ConverterHook) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Names the concrete type created for interface-typed values.
    #[inline]
    pub const fn with_implementation(mut self, implementation: Implementation) -> Self {
        self.implementation = Some(implementation);
        self
    }

    /// The key in the persisted tree.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[inline]
    pub const fn order(&self) -> i32 {
        self.order
    }

    #[inline]
    pub const fn converter(&self) -> Option<&ConverterHook> {
        self.converter.as_ref()
    }

    #[inline]
    pub const fn implementation(&self) -> Option<&Implementation> {
        self.implementation.as_ref()
    }
}

impl fmt::Debug for FieldMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMeta")
            .field("key", &self.key)
            .field("order", &self.order)
            .field("converter", &self.converter.as_ref().map(ConverterHook::converter))
            .field(
                "implementation",
                &self.implementation.as_ref().map(Implementation::type_path),
            )
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// An annotated field of an object.
///
/// `index` is the field's position among the annotated fields of its own
/// level, it is what [`Object::field_at`](crate::ops::Object::field_at) expects.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    shape: Shape,
    type_path: &'static str,
    meta: FieldMeta,
}

impl FieldInfo {
    /// Describes a field of declared type `F`.
    pub fn new<F: SerialType>(name: &'static str, index: usize, meta: FieldMeta) -> Self {
        Self {
            name,
            index,
            shape: F::SHAPE,
            type_path: F::type_path(),
            meta,
        }
    }

    /// The Rust identifier of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The shape of the declared type.
    #[inline]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    #[inline]
    pub const fn key(&self) -> &'static str {
        self.meta.key
    }

    #[inline]
    pub const fn order(&self) -> i32 {
        self.meta.order
    }
}
