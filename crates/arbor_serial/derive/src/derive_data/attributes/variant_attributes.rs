use super::for_each_serial_attr;

/// Attributes on an enum variant.
///
/// - `#[serial(rename = "NAME")]`: the persisted name, upper-cased.
#[derive(Default, Debug)]
pub(crate) struct VariantAttributes {
    pub rename: Option<syn::LitStr>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_serial_attr(attrs, |meta| {
            if meta.path.is_ident("rename") {
                if this.rename.is_some() {
                    return Err(meta.error("duplicate `rename`"));
                }
                let name: syn::LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "variant names cannot be empty"));
                }
                this.rename = Some(name);
                Ok(())
            } else {
                Err(meta.error("unknown variant attribute, expected `rename`"))
            }
        })?;
        Ok(this)
    }
}
