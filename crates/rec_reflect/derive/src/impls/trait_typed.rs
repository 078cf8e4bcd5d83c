use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed`
///
/// The schema is built on first access and cached in a static cell.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let rec_reflect_path = meta.rec_reflect_path();
    let trait_typed_ = crate::path::typed_(rec_reflect_path);
    let type_info_ = crate::path::type_info_(rec_reflect_path);
    let info_cell = crate::path::non_generic_type_info_cell_(rec_reflect_path);

    let type_info_tokens = info.to_info_tokens();
    let real_ident = meta.real_ident();

    quote! {
        impl #trait_typed_ for #real_ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
