use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::{DebugFP, OptionFP, PartialEqFP, PartialOrdFP, ResultFP};

/// Generate implementation code for `Reflect`.
///
/// `reflect_partial_eq`, `reflect_partial_cmp` and `reflect_debug` use the
/// standard traits when the type declares them, see `TraitAvailableFlags`.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let flags = &meta.attrs().avail_traits;

    let rec_reflect_path = meta.rec_reflect_path();
    let reflect_ = crate::path::reflect_(rec_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(rec_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(rec_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(rec_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(rec_reflect_path);
    let struct_partial_eq_ = crate::path::struct_partial_eq_(rec_reflect_path);
    let struct_partial_cmp_ = crate::path::struct_partial_cmp_(rec_reflect_path);

    let partial_eq_tokens = if flags.eq.is_some() {
        quote! {
            if let #OptionFP::Some(other) = <dyn #reflect_>::downcast_ref::<Self>(other) {
                return #OptionFP::Some(#PartialEqFP::eq(self, other));
            }
            #struct_partial_eq_(self, other)
        }
    } else {
        quote!(#struct_partial_eq_(self, other))
    };

    let partial_cmp_tokens = if flags.cmp.is_some() {
        quote! {
            if let #OptionFP::Some(other) = <dyn #reflect_>::downcast_ref::<Self>(other) {
                return #PartialOrdFP::partial_cmp(self, other);
            }
            #struct_partial_cmp_(self, other)
        }
    } else {
        quote!(#struct_partial_cmp_(self, other))
    };

    let debug_tokens = if flags.debug.is_some() {
        quote!(#DebugFP::fmt(self, f))
    } else {
        let struct_debug_ = crate::path::struct_debug_(rec_reflect_path);
        quote!(#struct_debug_(self, f))
    };

    let real_ident = meta.real_ident();

    quote! {
        impl #reflect_ for #real_ident {
            fn set(
                &mut self,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_exports_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #partial_eq_tokens
            }

            fn reflect_partial_cmp(
                &self,
                other: &dyn #reflect_,
            ) -> #OptionFP<::core::cmp::Ordering> {
                #partial_cmp_tokens
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #debug_tokens
            }
        }
    }
}
