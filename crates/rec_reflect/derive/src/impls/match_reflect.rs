use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectStruct;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> TokenStream {
    // Parse attributes and fields.
    let info = match ReflectStruct::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    // The token struct is named by the user, so it lives outside the block.
    let field_tokens = super::impl_field_tokens(&info);

    let type_path_tokens = super::impl_trait_type_path(&info);
    let typed_tokens = super::impl_trait_typed(&info);
    let struct_tokens = super::impl_trait_struct(&info);
    let reflect_tokens = super::impl_trait_reflect(&info);
    let from_reflect_tokens = super::impl_struct_from_reflect(&info);
    let lens_tokens = super::impl_trait_lens(&info);
    let record_tokens = super::impl_trait_record(&info);

    TokenStream::from(quote! {
        #field_tokens

        const _: () = {
            #type_path_tokens

            #typed_tokens

            #struct_tokens

            #reflect_tokens

            #from_reflect_tokens

            #lens_tokens

            #record_tokens
        };
    })
}
