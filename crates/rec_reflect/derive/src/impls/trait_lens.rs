use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `TupleLens`.
///
/// Similar to following:
///
/// ```ignore
/// impl TupleLens for Point {
///     type Ref<'a> = (&'a i32, &'a i32,) where Self: 'a;
///     type Mut<'a> = (&'a mut i32, &'a mut i32,) where Self: 'a;
///     type Values = (i32, i32,);
///     ......
/// }
/// ```
pub(crate) fn impl_trait_lens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let tuple_lens_ = crate::path::tuple_lens_(meta.rec_reflect_path());

    let (members, types): (Vec<_>, Vec<_>) =
        info.active_fields().map(|field| (field, field.ty())).unzip();
    let values = (0..members.len())
        .map(|index| format_ident!("__v{index}"))
        .collect::<Vec<_>>();

    let real_ident = meta.real_ident();

    quote! {
        impl #tuple_lens_ for #real_ident {
            type Ref<'a> = ( #(&'a #types,)* ) where Self: 'a;
            type Mut<'a> = ( #(&'a mut #types,)* ) where Self: 'a;
            type Values = ( #(#types,)* );

            #[inline]
            fn project(&self) -> Self::Ref<'_> {
                ( #(&self.#members,)* )
            }

            #[inline]
            fn project_mut(&mut self) -> Self::Mut<'_> {
                ( #(&mut self.#members,)* )
            }

            #[inline]
            fn assign(&mut self, values: Self::Values) {
                let ( #(#values,)* ) = values;
                #(self.#members = #values;)*
            }
        }
    }
}
