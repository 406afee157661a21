use proc_macro2::TokenStream;
use quote::quote;

/// The `Serial` methods every derived type forwards to `SerialType`.
///
/// `serial_assign` replaces the value when the box holds `Self`.
pub(crate) fn get_serial_common_tokens(arbor_serial_path: &syn::Path) -> TokenStream {
    let serial_ = crate::path::serial_(arbor_serial_path);
    let serial_type_ = crate::path::serial_type_(arbor_serial_path);
    let shape_ = crate::path::shape_(arbor_serial_path);
    let macro_exports_ = crate::path::macro_exports_(arbor_serial_path);

    quote! {
        #[inline]
        fn serial_type_path(&self) -> &'static str {
            <Self as #serial_type_>::type_path()
        }

        #[inline]
        fn serial_shape(&self) -> #shape_ {
            <Self as #serial_type_>::SHAPE
        }

        #[inline]
        fn serial_present(&self) -> ::core::option::Option<&dyn #serial_> {
            ::core::option::Option::Some(self)
        }

        fn serial_assign(
            &mut self,
            value: #macro_exports_::Box<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync>,
        ) -> ::core::result::Result<
            (),
            #macro_exports_::Box<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync>,
        > {
            *self = *value.downcast::<Self>()?;
            ::core::result::Result::Ok(())
        }
    }
}
