use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, get_serial_common_tokens, impl_trait_get_type_meta};

use crate::derive_data::SerialStruct;

/// Implement `Serial` for struct type.
pub(crate) fn impl_struct(info: &SerialStruct) -> TokenStream {
    // trait: Serial + SerialType
    let serial_trait_tokens = impl_trait_serial(info);

    // trait: Object
    let object_trait_tokens = impl_trait_object(info);

    // trait: ObjectType
    let object_type_trait_tokens = impl_trait_object_type(info);

    // trait: GetTypeMeta
    let get_type_meta_tokens = impl_trait_get_type_meta(info);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(info.meta());

    quote! {
        #serial_trait_tokens

        #object_trait_tokens

        #object_type_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

fn impl_trait_serial(info: &SerialStruct) -> TokenStream {
    let meta = info.meta();
    let arbor_serial_path = meta.arbor_serial_path();
    let serial_ = crate::path::serial_(arbor_serial_path);
    let serial_type_ = crate::path::serial_type_(arbor_serial_path);
    let serial_ref_ = crate::path::serial_ref_(arbor_serial_path);
    let serial_mut_ = crate::path::serial_mut_(arbor_serial_path);
    let shape_ = crate::path::shape_(arbor_serial_path);
    let field_meta_ = crate::path::field_meta_(arbor_serial_path);
    let serial_error_ = crate::path::serial_error_(arbor_serial_path);

    let common_tokens = get_serial_common_tokens(arbor_serial_path);
    let type_path_tokens = meta.type_path_expression();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&info.field_predicates());

    quote! {
        impl #impl_generics #serial_ for #real_ident #ty_generics #where_clause {
            #common_tokens

            #[inline]
            fn serial_ref(&self) -> #serial_ref_<'_> {
                #serial_ref_::Object(self)
            }

            #[inline]
            fn serial_mut(&mut self) -> #serial_mut_<'_> {
                #serial_mut_::Object(self)
            }

            fn serial_reset(&mut self) {
                *self = <Self as ::core::default::Default>::default();
            }
        }

        impl #impl_generics #serial_type_ for #real_ident #ty_generics #where_clause {
            const SHAPE: #shape_ = #shape_::Object;

            type Leaf = Self;

            type Convert = Self;

            #[inline]
            fn type_path() -> &'static str {
                #type_path_tokens
            }

            #[inline]
            fn new_slot(_: &#field_meta_) -> ::core::result::Result<Self, #serial_error_> {
                ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
            }
        }
    }
}

fn impl_trait_object(info: &SerialStruct) -> TokenStream {
    let meta = info.meta();
    let arbor_serial_path = meta.arbor_serial_path();
    let serial_ = crate::path::serial_(arbor_serial_path);
    let object_ = crate::path::object_(arbor_serial_path);
    let object_type_ = crate::path::object_type_(arbor_serial_path);
    let object_info_ = crate::path::object_info_(arbor_serial_path);

    let index_ = Ident::new("__index", Span::call_site());

    let (field_at_tokens, field_at_mut_tokens) = if info.fields.is_empty() {
        (
            quote! {
                let _ = #index_;
                ::core::option::Option::None
            },
            quote! {
                let _ = #index_;
                ::core::option::Option::None
            },
        )
    } else {
        let indices: Vec<usize> = info.fields.iter().map(|field| field.index).collect();
        let members: Vec<&syn::Member> = info.fields.iter().map(|field| &field.member).collect();
        (
            quote! {
                match #index_ {
                    #( #indices => ::core::option::Option::Some(&self.#members as &dyn #serial_), )*
                    _ => ::core::option::Option::None,
                }
            },
            quote! {
                match #index_ {
                    #( #indices => ::core::option::Option::Some(&mut self.#members as &mut dyn #serial_), )*
                    _ => ::core::option::Option::None,
                }
            },
        )
    };

    let (parent_tokens, parent_mut_tokens) = match &info.parent {
        Some(parent) => {
            let member = &parent.member;
            (
                quote! { ::core::option::Option::Some(&self.#member as &dyn #object_) },
                quote! { ::core::option::Option::Some(&mut self.#member as &mut dyn #object_) },
            )
        }
        None => (
            quote! { ::core::option::Option::None },
            quote! { ::core::option::Option::None },
        ),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&info.field_predicates());

    quote! {
        impl #impl_generics #object_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn serial_object_info(&self) -> &'static #object_info_ {
                <Self as #object_type_>::object_info()
            }

            fn field_at(&self, #index_: usize) -> ::core::option::Option<&dyn #serial_> {
                #field_at_tokens
            }

            fn field_at_mut(&mut self, #index_: usize) -> ::core::option::Option<&mut dyn #serial_> {
                #field_at_mut_tokens
            }

            #[inline]
            fn parent(&self) -> ::core::option::Option<&dyn #object_> {
                #parent_tokens
            }

            #[inline]
            fn parent_mut(&mut self) -> ::core::option::Option<&mut dyn #object_> {
                #parent_mut_tokens
            }
        }
    }
}

fn impl_trait_object_type(info: &SerialStruct) -> TokenStream {
    let meta = info.meta();
    let arbor_serial_path = meta.arbor_serial_path();
    let object_type_ = crate::path::object_type_(arbor_serial_path);
    let object_info_ = crate::path::object_info_(arbor_serial_path);

    let info_tokens = info.to_info_tokens();

    let cell_tokens = if meta.impl_with_generic() {
        let generic_info_cell_ = crate::path::generic_info_cell_(arbor_serial_path);
        quote! {
            static CELL: #generic_info_cell_ = #generic_info_cell_::new();
            CELL.get_or_insert::<Self>(|| #info_tokens)
        }
    } else {
        let non_generic_info_cell_ = crate::path::non_generic_info_cell_(arbor_serial_path);
        quote! {
            static CELL: #non_generic_info_cell_ = #non_generic_info_cell_::new();
            CELL.get_or_init(|| #info_tokens)
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&info.field_predicates());

    quote! {
        impl #impl_generics #object_type_ for #real_ident #ty_generics #where_clause {
            fn object_info() -> &'static #object_info_ {
                #cell_tokens
            }
        }
    }
}
