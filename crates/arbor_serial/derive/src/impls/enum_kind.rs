use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::get_serial_common_tokens;

use crate::derive_data::SerialEnum;

/// Implement `Serial` for fieldless enum type.
///
/// Variants are stored by their upper-case names, new values start at the
/// first variant.
pub(crate) fn impl_enum(info: &SerialEnum) -> TokenStream {
    let meta = info.meta();
    let arbor_serial_path = meta.arbor_serial_path();
    let serial_ = crate::path::serial_(arbor_serial_path);
    let serial_type_ = crate::path::serial_type_(arbor_serial_path);
    let serial_ref_ = crate::path::serial_ref_(arbor_serial_path);
    let serial_mut_ = crate::path::serial_mut_(arbor_serial_path);
    let enum_value_ = crate::path::enum_value_(arbor_serial_path);
    let shape_ = crate::path::shape_(arbor_serial_path);
    let field_meta_ = crate::path::field_meta_(arbor_serial_path);
    let serial_error_ = crate::path::serial_error_(arbor_serial_path);
    let error_kind_ = crate::path::error_kind_(arbor_serial_path);
    let macro_exports_ = crate::path::macro_exports_(arbor_serial_path);

    let common_tokens = get_serial_common_tokens(arbor_serial_path);
    let type_path_tokens = meta.type_path_expression();

    let first = info.first().ident;
    let idents: Vec<&Ident> = info.variants.iter().map(|variant| variant.ident).collect();
    let names: Vec<&str> = info.variants.iter().map(|variant| variant.name.as_str()).collect();

    let key_ = Ident::new("__key", Span::call_site());
    let name_ = Ident::new("__name", Span::call_site());

    let real_ident = meta.real_ident();

    quote! {
        const __VARIANT_NAMES: &[&str] = &[ #(#names),* ];

        impl #serial_ for #real_ident {
            #common_tokens

            #[inline]
            fn serial_ref(&self) -> #serial_ref_<'_> {
                #serial_ref_::Enum(self)
            }

            #[inline]
            fn serial_mut(&mut self) -> #serial_mut_<'_> {
                #serial_mut_::Enum(self)
            }

            #[inline]
            fn serial_reset(&mut self) {
                *self = Self::#first;
            }
        }

        impl #serial_type_ for #real_ident {
            const SHAPE: #shape_ = #shape_::Enum;

            type Leaf = Self;

            type Convert = Self;

            #[inline]
            fn type_path() -> &'static str {
                #type_path_tokens
            }

            #[inline]
            fn new_slot(_: &#field_meta_) -> ::core::result::Result<Self, #serial_error_> {
                ::core::result::Result::Ok(Self::#first)
            }

            fn from_key(#key_: &str) -> ::core::result::Result<Self, #error_kind_> {
                let #key_ = #macro_exports_::variant_key(#key_);
                match #key_.as_str() {
                    #( #names => ::core::result::Result::Ok(Self::#idents), )*
                    _ => ::core::result::Result::Err(#macro_exports_::unknown_variant(
                        <Self as #serial_type_>::type_path(),
                        #key_,
                        __VARIANT_NAMES,
                    )),
                }
            }
        }

        impl #enum_value_ for #real_ident {
            fn variant_name(&self) -> &'static str {
                match self {
                    #( Self::#idents => #names, )*
                }
            }

            fn set_variant_name(&mut self, #name_: &str) -> bool {
                match #name_ {
                    #( #names => { *self = Self::#idents; true } )*
                    _ => false,
                }
            }

            #[inline]
            fn variant_names(&self) -> &'static [&'static str] {
                __VARIANT_NAMES
            }
        }
    }
}
