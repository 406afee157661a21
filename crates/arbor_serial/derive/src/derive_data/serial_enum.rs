use syn::{Fields, Ident, Variant};

use super::{SerialMeta, VariantAttributes};
use crate::utils::screaming_snake_case;

// -----------------------------------------------------------------------------
// Define

pub(crate) struct SerialEnum<'a> {
    pub meta: SerialMeta<'a>,
    pub variants: Vec<EnumVariant<'a>>,
}

/// A unit variant and its persisted name.
pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub name: String,
}

// -----------------------------------------------------------------------------
// SerialEnum

impl<'a> SerialEnum<'a> {
    pub fn new(meta: SerialMeta<'a>, variants: impl IntoIterator<Item = &'a Variant>) -> syn::Result<Self> {
        let mut parsed: Vec<EnumVariant<'a>> = Vec::new();

        for variant in variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "`Serial` enums must be fieldless",
                ));
            }

            let attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
            let name = match &attrs.rename {
                Some(rename) => rename.value().to_uppercase(),
                None => screaming_snake_case(&syn::ext::IdentExt::unraw(&variant.ident).to_string()),
            };

            if let Some(other) = parsed.iter().find(|other| other.name == name) {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    format!("`{}` and `{}` are both stored as `{name}`", other.ident, variant.ident),
                ));
            }

            parsed.push(EnumVariant {
                ident: &variant.ident,
                name,
            });
        }

        if parsed.is_empty() {
            return Err(syn::Error::new_spanned(
                meta.real_ident(),
                "`Serial` enums need at least one variant",
            ));
        }

        Ok(Self {
            meta,
            variants: parsed,
        })
    }

    #[inline]
    pub fn meta(&self) -> &SerialMeta<'a> {
        &self.meta
    }

    /// The variant new values start as.
    #[inline]
    pub fn first(&self) -> &EnumVariant<'a> {
        &self.variants[0]
    }
}
