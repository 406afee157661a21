use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::SerialDerive;

/// Provided for `#[derive(Serial)]`.
pub(crate) fn match_serial_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attributes and fields.
    let serial_derive = match SerialDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let serial_impls: proc_macro2::TokenStream = match serial_derive {
        SerialDerive::Struct(info) => crate::impls::impl_struct(&info),
        SerialDerive::Enum(info) => crate::impls::impl_enum(&info),
    };

    TokenStream::from(quote! {
        const _: () = {
            #serial_impls
        };
    })
}
