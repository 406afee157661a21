use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn serial_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::Serial
    }
}

#[inline(always)]
pub(crate) fn serial_type_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::SerialType
    }
}

#[inline(always)]
pub(crate) fn serial_ref_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::SerialRef
    }
}

#[inline(always)]
pub(crate) fn serial_mut_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::SerialMut
    }
}

#[inline(always)]
pub(crate) fn object_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::Object
    }
}

#[inline(always)]
pub(crate) fn object_type_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::ObjectType
    }
}

#[inline(always)]
pub(crate) fn enum_value_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::EnumValue
    }
}

#[inline(always)]
pub(crate) fn interface_slot_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::InterfaceSlot
    }
}

#[inline(always)]
pub(crate) fn implements_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ops::Implements
    }
}
