use proc_macro2::Span;
use syn::{LitInt, LitStr, Path, Token};

use super::for_each_serial_attr;

/// Attributes on a struct field.
///
/// - `#[serial(order = N)]`: required, position in the output.
/// - `#[serial(key = "name")]`: the tree key, the field name by default.
/// - `#[serial(converter = Type)]`: a `Converter` of the field's value type.
/// - `#[serial(implementation = Type)]`: concrete type for interface values.
/// - `#[serial(parent)]`: the field stands in for a parent type. Cannot be
///   combined with the others.
///
/// A field without any `#[serial]` attribute is ignored.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub annotated: bool,
    pub order: Option<i32>,
    pub key: Option<LitStr>,
    pub converter: Option<Path>,
    pub implementation: Option<Path>,
    pub parent: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[syn::Attribute], field_span: Span) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_serial_attr(attrs, |meta| {
            this.annotated = true;

            if meta.path.is_ident("order") {
                if this.order.is_some() {
                    return Err(meta.error("duplicate `order`"));
                }
                let input = meta.value()?;
                let negative = input.parse::<Option<Token![-]>>()?.is_some();
                let lit: LitInt = input.parse()?;
                let value: i32 = lit.base10_parse()?;
                this.order = Some(if negative { -value } else { value });
            } else if meta.path.is_ident("key") {
                if this.key.is_some() {
                    return Err(meta.error("duplicate `key`"));
                }
                this.key = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("converter") {
                if this.converter.is_some() {
                    return Err(meta.error("duplicate `converter`"));
                }
                this.converter = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("implementation") {
                if this.implementation.is_some() {
                    return Err(meta.error("duplicate `implementation`"));
                }
                this.implementation = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("parent") {
                if this.parent.is_some() {
                    return Err(meta.error("duplicate `parent`"));
                }
                this.parent = Some(meta.path.get_ident().map_or_else(Span::call_site, |i| i.span()));
            } else {
                return Err(meta.error(
                    "unknown field attribute, expected `order`, `key`, `converter`, `implementation` or `parent`",
                ));
            }
            Ok(())
        })?;
        this.validity(field_span)?;
        Ok(this)
    }

    fn validity(&self, field_span: Span) -> syn::Result<()> {
        if !self.annotated {
            return Ok(());
        }
        if let Some(span) = self.parent {
            let combined = self.order.is_some()
                || self.key.is_some()
                || self.converter.is_some()
                || self.implementation.is_some();
            if combined {
                return Err(syn::Error::new(span, "`parent` cannot be combined with other attributes"));
            }
            return Ok(());
        }
        if self.order.is_none() {
            return Err(syn::Error::new(field_span, "missing `#[serial(order = N)]`"));
        }
        Ok(())
    }
}
