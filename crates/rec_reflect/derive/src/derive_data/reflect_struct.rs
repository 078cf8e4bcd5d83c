use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A parsed field of a record.
pub(crate) struct StructField<'a> {
    /// The original field.
    pub data: &'a syn::Field,
    pub attrs: FieldAttributes,
    /// Index among the reflected fields, `None` for ignored fields.
    pub reflection_index: Option<usize>,
    /// Schema name, the unraw'd ident or the `rename` value.
    pub name: String,
}

impl StructField<'_> {
    /// The field ident. Records only have named fields.
    #[inline]
    pub fn ident(&self) -> &Ident {
        // Checked in `ReflectStruct::from_input`.
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("unnamed field in a record"),
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }
}

/// A record: a struct with named fields, or a unit struct.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`#[derive(Reflect)]` does not support generic records",
            ));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named.named.iter().collect(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) => {
                    return Err(syn::Error::new_spanned(
                        unnamed,
                        "`#[derive(Reflect)]` does not support tuple structs, use named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Reflect)]` does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` does not support unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.vis);

        Ok(Self {
            meta,
            fields: Self::collect_fields(fields)?,
        })
    }

    fn collect_fields(fields: Vec<&'a syn::Field>) -> syn::Result<Vec<StructField<'a>>> {
        let mut names = HashSet::with_capacity(fields.len());
        let mut reflection_index = 0;
        let mut output = Vec::with_capacity(fields.len());

        for data in fields {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;

            let (name, span) = match (&attrs.rename, &data.ident) {
                (Some(lit), _) => (lit.value(), lit.span()),
                (None, Some(ident)) => (crate::utils::ident_name(ident), ident.span()),
                (None, None) => (String::new(), Span::call_site()),
            };

            let index = if attrs.ignore.is_some() {
                None
            } else {
                if !names.insert(name.clone()) {
                    return Err(syn::Error::new(
                        span,
                        format!("duplicate field name `{name}` in record schema"),
                    ));
                }
                reflection_index += 1;
                Some(reflection_index - 1)
            };

            output.push(StructField {
                data,
                attrs,
                reflection_index: index,
                name,
            });
        }

        Ok(output)
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that take part in reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.ignore.is_none())
    }

    /// Fields marked `#[reflect(ignore)]`.
    pub fn ignored_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.ignore.is_some())
    }

    /// Generate the `TypeInfo` expression of the record.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::NamedField::new::<i32>("x"),
    ///         ......
    ///     ])
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let rec_reflect_path = self.meta.rec_reflect_path();
        let type_info_ = crate::path::type_info_(rec_reflect_path);
        let struct_info_ = crate::path::struct_info_(rec_reflect_path);
        let named_field_ = crate::path::named_field_(rec_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = field.ty();
            let name = &field.name;
            quote!(#named_field_::new::<#ty>(#name))
        });

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#fields,)* ])
            )
        }
    }

    /// Generate `field: <Default>::default()` for every ignored field.
    pub fn ignored_defaults(&self) -> TokenStream {
        use crate::path::fp::DefaultFP;

        let default_ = DefaultFP.to_token_stream();
        let members = self.ignored_fields().map(StructField::ident);
        quote! {
            #(#members: <_ as #default_>::default(),)*
        }
    }
}

impl ToTokens for StructField<'_> {
    /// The field member, usable as `self.#field`.
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.ident().to_tokens(tokens);
    }
}
