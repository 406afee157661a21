use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemTrait, TypeParamBound, parse_quote};

/// Provided for `#[interface]`.
///
/// Adds `Object` as a supertrait and implements `Serial`, `SerialType`,
/// `InterfaceSlot` and `Implements<C>` for `Box<dyn Trait>`.
pub(crate) fn impl_interface(input: TokenStream) -> TokenStream {
    let mut item_trait = match syn::parse::<ItemTrait>(input) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item_trait.generics,
            "`#[interface]` traits cannot be generic",
        )
        .into_compile_error()
        .into();
    }

    let arbor_serial_path = crate::path::arbor_serial();
    let serial_ = crate::path::serial_(&arbor_serial_path);
    let serial_type_ = crate::path::serial_type_(&arbor_serial_path);
    let serial_ref_ = crate::path::serial_ref_(&arbor_serial_path);
    let serial_mut_ = crate::path::serial_mut_(&arbor_serial_path);
    let object_ = crate::path::object_(&arbor_serial_path);
    let interface_slot_ = crate::path::interface_slot_(&arbor_serial_path);
    let implements_ = crate::path::implements_(&arbor_serial_path);
    let shape_ = crate::path::shape_(&arbor_serial_path);
    let field_meta_ = crate::path::field_meta_(&arbor_serial_path);
    let implementation_ = crate::path::implementation_(&arbor_serial_path);
    let serial_error_ = crate::path::serial_error_(&arbor_serial_path);
    let error_kind_ = crate::path::error_kind_(&arbor_serial_path);
    let macro_exports_ = crate::path::macro_exports_(&arbor_serial_path);

    let supertrait: TypeParamBound = parse_quote!(#object_);
    item_trait.supertraits.push(supertrait);
    if item_trait.colon_token.is_none() {
        item_trait.colon_token = Some(Default::default());
    }

    let common_tokens = super::get_serial_common_tokens(&arbor_serial_path);
    let ident = &item_trait.ident;

    let serial_impls = quote! {
        impl #serial_ for #macro_exports_::Box<dyn #ident> {
            #common_tokens

            #[inline]
            fn serial_ref(&self) -> #serial_ref_<'_> {
                #serial_ref_::Object(&**self)
            }

            #[inline]
            fn serial_mut(&mut self) -> #serial_mut_<'_> {
                #serial_mut_::Interface(self)
            }

            #[inline]
            fn serial_reset(&mut self) {
                <dyn #ident as #serial_>::serial_reset(&mut **self);
            }
        }

        impl #serial_type_ for #macro_exports_::Box<dyn #ident> {
            const SHAPE: #shape_ = #shape_::Interface;

            type Leaf = Self;

            type Convert = Self;

            #[inline]
            fn type_path() -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn new_slot(meta: &#field_meta_) -> ::core::result::Result<Self, #serial_error_> {
                match meta.implementation() {
                    ::core::option::Option::Some(implementation) => {
                        #macro_exports_::create_interface::<Self>(implementation)
                    }
                    ::core::option::Option::None => ::core::result::Result::Err(
                        #serial_error_::from(#error_kind_::MissingImplementation {
                            type_path: <Self as #serial_type_>::type_path(),
                        }),
                    ),
                }
            }
        }

        impl #interface_slot_ for #macro_exports_::Box<dyn #ident> {
            #[inline]
            fn interface_path(&self) -> &'static str {
                <Self as #serial_type_>::type_path()
            }

            fn instantiate(
                &mut self,
                implementation: &#implementation_,
            ) -> ::core::result::Result<&mut dyn #object_, #serial_error_> {
                *self = #macro_exports_::create_interface::<Self>(implementation)?;
                ::core::result::Result::Ok(&mut **self)
            }
        }

        impl<C: #ident + ::core::default::Default> #implements_<C> for #macro_exports_::Box<dyn #ident> {
            #[inline]
            fn create() -> Self {
                #macro_exports_::Box::new(C::default())
            }
        }
    };

    TokenStream::from(quote! {
        #item_trait

        const _: () = {
            #serial_impls
        };
    })
}
