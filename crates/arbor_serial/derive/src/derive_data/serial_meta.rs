use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Path, WherePredicate, parse_quote};

use super::TypeAttributes;

/// What every generator needs to know about the input type.
pub(crate) struct SerialMeta<'a> {
    arbor_serial_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for SerialMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SerialMeta")
            .field("arbor_serial_path", &self.arbor_serial_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> SerialMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            arbor_serial_path: crate::path::arbor_serial(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn arbor_serial_path(&self) -> &Path {
        &self.arbor_serial_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    /// The identifier as a string literal, without `r#`.
    pub fn type_name(&self) -> String {
        syn::ext::IdentExt::unraw(self.ident).to_string()
    }

    /// Whether the type has type or const parameters.
    ///
    /// Lifetime parameters are rejected earlier, `Serial` needs `'static`.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some() || self.generics.const_params().next().is_some()
    }

    /// Expression of the `&'static str` type path.
    ///
    /// Non-generic types use `module_path!()`, generic ones fall back to
    /// `type_name` so each instantiation gets its own path.
    pub fn type_path_expression(&self) -> TokenStream {
        if self.impl_with_generic() {
            quote! { ::core::any::type_name::<Self>() }
        } else {
            let name = self.type_name();
            quote! { ::core::concat!(::core::module_path!(), "::", #name) }
        }
    }

    /// Splits the generics for an impl block.
    ///
    /// Generic types get the bounds `Serial` relies on: `'static + Send + Sync`
    /// on every type parameter, `Default` on the type itself and
    /// `extra` (usually bounds on field types).
    pub fn split_generics(&self, extra: &[WherePredicate]) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        if !self.impl_with_generic() {
            return (
                impl_generics.to_token_stream(),
                ty_generics.to_token_stream(),
                where_clause.to_token_stream(),
            );
        }

        let ident = self.ident;
        let mut predicates: Vec<WherePredicate> = where_clause
            .map(|clause| clause.predicates.iter().cloned().collect())
            .unwrap_or_default();

        for param in self.generics.type_params() {
            let param = &param.ident;
            predicates.push(parse_quote! {
                #param: 'static + ::core::marker::Send + ::core::marker::Sync
            });
        }
        predicates.push(parse_quote! {
            #ident #ty_generics: ::core::default::Default
        });
        predicates.extend(extra.iter().cloned());

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            quote! { where #(#predicates,)* },
        )
    }
}
