use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Generate `Struct` trait implementation tokens.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rec_reflect_path = meta.rec_reflect_path();
    let struct_ = crate::path::struct_(rec_reflect_path);
    let reflect_ = crate::path::reflect_(rec_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(rec_reflect_path);

    let (field_names, (field_indices, members)): (Vec<_>, (Vec<_>, Vec<_>)) = info
        .active_fields()
        .map(|field| {
            let index = field.reflection_index.unwrap_or_default();
            (field.name.as_str(), (index, field))
        })
        .unzip();

    let field_count = field_indices.len();
    let real_ident = meta.real_ident();
    let option_ = OptionFP.to_token_stream();

    quote! {
        impl #struct_ for #real_ident {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
