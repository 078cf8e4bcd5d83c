use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let trait_type_path_ = crate::path::type_path_(meta.rec_reflect_path());

    let real_ident = meta.real_ident();
    let type_path = meta.type_path();
    let type_name = meta.type_name();
    let module_path = meta.module_path();

    quote! {
        impl #trait_type_path_ for #real_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #module_path
            }
        }
    }
}
