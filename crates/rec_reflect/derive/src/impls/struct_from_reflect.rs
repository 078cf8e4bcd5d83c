use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::{CloneFP, OptionFP};

/// Generate `FromReflect::from_reflect` tokens.
///
/// Any reflected `Struct` is accepted, fields are matched by name and
/// converted with their own `FromReflect`.
pub(crate) fn impl_struct_from_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rec_reflect_path = meta.rec_reflect_path();
    let reflect_ = crate::path::reflect_(rec_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(rec_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(rec_reflect_path);
    let struct_ = crate::path::struct_(rec_reflect_path);

    let clone_tokens = if meta.attrs().avail_traits.clone.is_some() {
        quote! {
            if let #OptionFP::Some(__this) = <dyn #reflect_>::downcast_ref::<Self>(__input) {
                return #OptionFP::Some(#CloneFP::clone(__this));
            }
        }
    } else {
        crate::utils::empty()
    };

    let active_values = info.active_fields().map(|field| {
        let ty = field.ty();
        let name = &field.name;
        quote! {
            #field: <#ty as #from_reflect_>::from_reflect(
                #struct_::field(__input, #name)?
            )?,
        }
    });
    let ignored_defaults = info.ignored_defaults();

    let real_ident = meta.real_ident();

    quote! {
        impl #from_reflect_ for #real_ident {
            fn from_reflect(__input: &dyn #reflect_) -> #OptionFP<Self> {
                #clone_tokens

                if let #reflect_ref_::Struct(__input) = #reflect_::reflect_ref(__input) {
                    return #OptionFP::Some(Self {
                        #(#active_values)*
                        #ignored_defaults
                    });
                }

                #OptionFP::None
            }
        }
    }
}
