use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Field, Ident, Member, Type, WherePredicate, parse_quote};

use super::{FieldAttributes, SerialMeta};

// -----------------------------------------------------------------------------
// Define

pub(crate) struct SerialStruct<'a> {
    pub meta: SerialMeta<'a>,
    /// Annotated fields, except the parent, in declaration order.
    pub fields: Vec<StructField<'a>>,
    pub parent: Option<StructField<'a>>,
}

pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position among the annotated fields, what `Object::field_at` takes.
    pub index: usize,
    pub member: Member,
}

// -----------------------------------------------------------------------------
// StructField

impl StructField<'_> {
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    /// The Rust name, without `r#`.
    pub fn name(&self) -> String {
        self.data
            .ident
            .as_ref()
            .map(|ident| syn::ext::IdentExt::unraw(ident).to_string())
            .unwrap_or_default()
    }

    /// The tree key: `#[serial(key = "...")]` or the field name.
    pub fn key(&self) -> String {
        match &self.attrs.key {
            Some(key) => key.value(),
            None => self.name(),
        }
    }

    /// Generates the `FieldInfo` of this field.
    ///
    /// ```ignore
    /// FieldInfo::new::<Ty>("name", 0, FieldMeta::new("key", 1)
    ///     .with_converter(ConverterHook::of::<<Ty as SerialType>::Convert, C>())
    ///     .with_implementation(Implementation::of::<<Ty as SerialType>::Leaf, I>()))
    /// ```
    pub fn to_info_tokens(&self, arbor_serial_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(arbor_serial_path);
        let field_meta_ = crate::path::field_meta_(arbor_serial_path);
        let serial_type_ = crate::path::serial_type_(arbor_serial_path);

        let ty = self.ty();
        let name = self.name();
        let key = self.key();
        let index = self.index;
        let order = self.attrs.order.unwrap_or_default();

        let with_converter = self.attrs.converter.as_ref().map(|converter| {
            let converter_hook_ = crate::path::converter_hook_(arbor_serial_path);
            quote_spanned! { converter.span() =>
                .with_converter(#converter_hook_::of::<<#ty as #serial_type_>::Convert, #converter>())
            }
        });

        let with_implementation = self.attrs.implementation.as_ref().map(|implementation| {
            let implementation_ = crate::path::implementation_(arbor_serial_path);
            quote_spanned! { implementation.span() =>
                .with_implementation(#implementation_::of::<<#ty as #serial_type_>::Leaf, #implementation>())
            }
        });

        quote! {
            #field_info_::new::<#ty>(
                #name,
                #index,
                #field_meta_::new(#key, #order)
                    #with_converter
                    #with_implementation
            )
        }
    }
}

// -----------------------------------------------------------------------------
// SerialStruct

impl<'a> SerialStruct<'a> {
    pub fn new(meta: SerialMeta<'a>, fields: impl IntoIterator<Item = &'a Field>) -> syn::Result<Self> {
        let mut annotated = Vec::new();
        let mut parent = None;

        for (position, data) in fields.into_iter().enumerate() {
            let member = match &data.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(position.into()),
            };
            let attrs = FieldAttributes::parse_attrs(&data.attrs, data.span())?;
            if !attrs.annotated {
                continue;
            }
            if let Some(span) = attrs.parent {
                if parent.is_some() {
                    return Err(syn::Error::new(span, "only one field can be the `parent`"));
                }
                parent = Some(StructField {
                    data,
                    attrs,
                    index: 0,
                    member,
                });
                continue;
            }
            let index = annotated.len();
            annotated.push(StructField {
                data,
                attrs,
                index,
                member,
            });
        }

        Ok(Self {
            meta,
            fields: annotated,
            parent,
        })
    }

    #[inline]
    pub fn meta(&self) -> &SerialMeta<'a> {
        &self.meta
    }

    /// Bounds on field types, needed when the struct is generic.
    pub fn field_predicates(&self) -> Vec<WherePredicate> {
        if !self.meta.impl_with_generic() {
            return Vec::new();
        }
        let arbor_serial_path = self.meta.arbor_serial_path();
        let serial_type_ = crate::path::serial_type_(arbor_serial_path);
        let get_type_meta_ = crate::path::get_type_meta_(arbor_serial_path);

        let mut predicates: Vec<WherePredicate> = self
            .fields
            .iter()
            .map(|field| {
                let ty = field.ty();
                parse_quote! { #ty: #serial_type_ }
            })
            .collect();

        if let Some(parent) = &self.parent {
            let ty = parent.ty();
            predicates.push(parse_quote! { #ty: #get_type_meta_ });
        }

        predicates
    }

    /// The `ObjectInfo` construction expression.
    pub fn to_info_tokens(&self) -> TokenStream {
        let arbor_serial_path = self.meta.arbor_serial_path();
        let object_info_ = crate::path::object_info_(arbor_serial_path);
        let field_info_ = crate::path::field_info_(arbor_serial_path);

        let type_name = self.meta.type_name();
        let count = self.fields.len();
        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(arbor_serial_path));

        let with_parent = self.parent.as_ref().map(|parent| {
            let ty = parent.ty();
            quote! { .with_parent::<#ty>() }
        });

        let fields_ = Ident::new("__fields", proc_macro2::Span::call_site());

        quote! {{
            let #fields_: [#field_info_; #count] = [ #(#fields),* ];
            #object_info_::new::<Self>(#type_name, #fields_) #with_parent
        }}
    }
}
