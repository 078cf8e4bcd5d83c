//! This independent module is used to provide the required path.
//! So as to minimize changes when the `rec_reflect` structure is modified.
//!
//! The only special feature is the path of rec_reflect itself,
//! See [`rec_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `rec_reflect` crate.
///
/// 1. For crates that depend on `rec_reflect`, `::rec_reflect` is returned.
/// 2. For crates that depend on `rec_core`, `::rec_core::reflect` is returned.
/// 3. For other situations, `::rec_reflect` is returned, but this may be incorrect.
///
/// Reads the caller's `Cargo.toml`, so it is called once per derive and
/// the path is passed around.
pub(crate) fn rec_reflect() -> syn::Path {
    rec_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rec_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! define_path {
    ($($name:ident => $($segment:ident)::+;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(rec_reflect_path: &syn::Path) -> TokenStream {
                quote! {
                    #rec_reflect_path $(:: $segment)+
                }
            }
        )*
    };
}

define_path! {
    reflect_ => Reflect;
    from_reflect_ => FromReflect;
    record_ => Record;
    macro_exports_ => __macro_exports;

    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    reflect_kind_ => info::ReflectKind;

    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;

    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    struct_partial_eq_ => impls::struct_partial_eq;
    struct_partial_cmp_ => impls::struct_partial_cmp;
    struct_debug_ => impls::struct_debug;

    tuple_lens_ => lens::TupleLens;

    field_ => builder::Field;
    slots_ => builder::Slots;
    build_error_ => builder::BuildError;
}
