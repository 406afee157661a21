//! Parsing of `#[serial(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;
mod variant_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;
pub(crate) use variant_attributes::VariantAttributes;

/// Calls `parse` for every `#[serial(...)]` attribute in `attrs`.
fn for_each_serial_attr(
    attrs: &[syn::Attribute],
    mut parse: impl FnMut(syn::meta::ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(crate::SERIAL_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut parse)?;
        }
    }
    Ok(())
}
