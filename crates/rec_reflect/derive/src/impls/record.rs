use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::ResultFP;

/// Generate the `<Name>Fields` struct, one `Field` token per active field.
pub(crate) fn impl_field_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let field_ = crate::path::field_(meta.rec_reflect_path());

    let vis = meta.vis();
    let real_ident = meta.real_ident();
    let fields_ident = meta.fields_ident();

    let fields = info.active_fields().map(|field| {
        let ty = field.ty();
        quote!(pub #field: #field_<#real_ident, #ty>,)
    });

    let doc = format!(
        "Field tokens of [`{}`], see `Record::FIELDS`.",
        crate::utils::ident_name(real_ident),
    );

    quote! {
        #[doc = #doc]
        #[allow(missing_docs, reason = "generated")]
        #[derive(Clone, Copy, Debug)]
        #vis struct #fields_ident {
            #(#fields)*
        }
    }
}

/// Generate implementation code for `Record`.
pub(crate) fn impl_trait_record(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rec_reflect_path = meta.rec_reflect_path();
    let record_ = crate::path::record_(rec_reflect_path);
    let field_ = crate::path::field_(rec_reflect_path);
    let typed_ = crate::path::typed_(rec_reflect_path);
    let type_info_ = crate::path::type_info_(rec_reflect_path);
    let struct_info_ = crate::path::struct_info_(rec_reflect_path);
    let slots_ = crate::path::slots_(rec_reflect_path);
    let build_error_ = crate::path::build_error_(rec_reflect_path);

    let real_ident = meta.real_ident();
    let fields_ident = meta.fields_ident();

    let tokens = info.active_fields().map(|field| {
        let index = field.reflection_index.unwrap_or_default();
        let name = &field.name;
        quote! {
            #field: #field_::new(
                #index,
                #name,
                |__r| &__r.#field,
                |__r| &mut __r.#field,
            ),
        }
    });

    let takes = info.active_fields().map(|field| {
        let index = field.reflection_index.unwrap_or_default();
        let ty = field.ty();
        quote!(#field: __slots.take::<#ty>(#index)?,)
    });
    let ignored_defaults = info.ignored_defaults();

    quote! {
        impl #record_ for #real_ident {
            type Fields = #fields_ident;

            const FIELDS: Self::Fields = #fields_ident {
                #(#tokens)*
            };

            fn schema() -> &'static #struct_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Struct(info) => info,
                    _ => ::core::unreachable!(),
                }
            }

            fn from_slots(__slots: &mut #slots_) -> #ResultFP<Self, #build_error_> {
                #ResultFP::Ok(Self {
                    #(#takes)*
                    #ignored_defaults
                })
            }
        }
    }
}
