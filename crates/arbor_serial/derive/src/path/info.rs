use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn shape_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::info::Shape
    }
}

#[inline(always)]
pub(crate) fn object_info_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::info::ObjectInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn field_meta_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::info::FieldMeta
    }
}

#[inline(always)]
pub(crate) fn converter_hook_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::convert::ConverterHook
    }
}

#[inline(always)]
pub(crate) fn implementation_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::convert::Implementation
    }
}
