use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn get_type_meta_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::registry::GetTypeMeta
    }
}

#[inline]
pub(crate) fn type_registry_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::registry::TypeRegistry
    }
}
