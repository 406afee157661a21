use proc_macro2::Span;

use super::for_each_serial_attr;

/// Attributes on the type itself.
///
/// - `#[serial(auto_register)]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_serial_attr(attrs, |meta| {
            if meta.path.is_ident("auto_register") {
                if this.auto_register.is_some() {
                    return Err(meta.error("duplicate `auto_register`"));
                }
                this.auto_register = Some(meta.path.get_ident().map_or_else(Span::call_site, |i| i.span()));
                Ok(())
            } else {
                Err(meta.error("unknown type attribute, expected `auto_register`"))
            }
        })?;
        Ok(this)
    }
}
