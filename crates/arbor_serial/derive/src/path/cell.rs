use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_info_cell_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::impls::NonGenericInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_info_cell_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::impls::GenericInfoCell
    }
}
