//! Paths into `arbor_serial` used by the generated code.
//!
//! Keeping them here means a layout change in `arbor_serial` only touches
//! this module. The crate path itself is resolved by [`arbor_serial`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `arbor_serial` crate.
///
/// 1. For crates that depend on `arbor_serial`, `::arbor_serial` is returned.
/// 2. For crates that depend on `arbor`, `::arbor::serial` is returned.
/// 3. Otherwise `::arbor_serial` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the path is resolved once per
/// macro call and handed around.
pub(crate) fn arbor_serial() -> syn::Path {
    arbor_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("arbor_serial"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;
mod registry;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_exports_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn serial_error_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::SerialError
    }
}

#[inline(always)]
pub(crate) fn error_kind_(arbor_serial_path: &syn::Path) -> TokenStream {
    quote! {
        #arbor_serial_path::ErrorKind
    }
}
