use proc_macro2::TokenStream;

use crate::derive_data::SerialMeta;

/// Submits the struct to the link-time list read by `TypeRegistry::auto_register`.
///
/// Empty without `#[serial(auto_register)]` or the `auto_register` feature.
/// Generic structs never get here, parsing rejects them.
pub(crate) fn get_auto_register_impl(meta: &SerialMeta) -> TokenStream {
    #[cfg(feature = "auto_register")]
    if let Some(span) = meta.attrs().auto_register {
        let auto_register_ = crate::path::auto_register_(meta.arbor_serial_path());
        let real_ident = meta.real_ident();
        let register_fn = quote::quote_spanned! { span =>
            <#real_ident as #auto_register_::__RegisterType>::__register
        };

        return quote::quote_spanned! { span =>
            #auto_register_::inventory::submit! {
                #auto_register_::__AutoRegisterFunc(#register_fn)
            }
        };
    }

    #[cfg(not(feature = "auto_register"))]
    let _ = meta;

    crate::utils::empty()
}
