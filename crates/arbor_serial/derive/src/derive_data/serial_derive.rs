use syn::{Data, DeriveInput, Fields};

use super::{SerialEnum, SerialMeta, SerialStruct, TypeAttributes};

/// The input of `#[derive(Serial)]`, by kind.
pub(crate) enum SerialDerive<'a> {
    Struct(SerialStruct<'a>),
    Enum(SerialEnum<'a>),
}

impl<'a> SerialDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Serial` types cannot borrow, they must be `'static`",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = SerialMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            Data::Struct(_) if meta.impl_with_generic() && meta.attrs().auto_register.is_some() => {
                Err(syn::Error::new_spanned(
                    &input.generics,
                    "generic structs cannot be auto-registered, register each instance by hand",
                ))
            }
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Ok(Self::Struct(SerialStruct::new(meta, &fields.named)?)),
                Fields::Unit => Ok(Self::Struct(SerialStruct::new(meta, None)?)),
                Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
                    fields,
                    "`Serial` cannot be derived for tuple structs, fields need names",
                )),
            },
            Data::Enum(data) => {
                if meta.impl_with_generic() {
                    return Err(syn::Error::new_spanned(
                        &input.generics,
                        "`Serial` cannot be derived for generic enums",
                    ));
                }
                if let Some(span) = meta.attrs().auto_register {
                    return Err(syn::Error::new(span, "only structs can be auto-registered"));
                }
                Ok(Self::Enum(SerialEnum::new(meta, &data.variants)?))
            }
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "`Serial` cannot be derived for unions",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::SerialDerive;

    #[test]
    fn auto_register_needs_a_concrete_struct() {
        let generic: DeriveInput = parse_quote! {
            #[serial(auto_register)]
            struct Crate<T> {
                #[serial(order = 1)]
                item: T,
            }
        };
        let err = SerialDerive::from_input(&generic).err().unwrap();
        assert!(err.to_string().contains("cannot be auto-registered"));

        let concrete: DeriveInput = parse_quote! {
            #[serial(auto_register)]
            struct Crate {
                #[serial(order = 1)]
                item: u32,
            }
        };
        assert!(matches!(SerialDerive::from_input(&concrete), Ok(SerialDerive::Struct(_))));
    }
}
