use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SerialStruct;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// The parent type, if any, is registered along with the struct.
pub(crate) fn impl_trait_get_type_meta(info: &SerialStruct) -> TokenStream {
    let meta = info.meta();
    let arbor_serial_path = meta.arbor_serial_path();
    let get_type_meta_ = crate::path::get_type_meta_(arbor_serial_path);
    let type_registry_ = crate::path::type_registry_(arbor_serial_path);

    let register_deps_tokens = match &info.parent {
        Some(parent) => {
            let ty = parent.ty();
            quote! {
                fn register_dependencies(registry: &mut #type_registry_) {
                    #type_registry_::register::<#ty>(registry);
                }
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&info.field_predicates());

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            #register_deps_tokens
        }
    }
}
