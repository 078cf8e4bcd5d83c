//! Fully qualified paths of `core` items used by generated code.
//!
//! Generated code must not depend on the names in scope at the call site,
//! a local `Option` or `Default` would otherwise shadow the prelude.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($(#[$docs:meta])* $name:ident => $(:: $segment:ident)+;)*) => {
        $(
            $(#[$docs])*
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($(:: $segment)+));
                }
            }
        )*
    };
}

define_fp! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
    /// `::core::clone::Clone`
    CloneFP => ::core::clone::Clone;
    /// `::core::cmp::PartialEq`
    PartialEqFP => ::core::cmp::PartialEq;
    /// `::core::cmp::PartialOrd`
    PartialOrdFP => ::core::cmp::PartialOrd;
    /// `::core::fmt::Debug`
    DebugFP => ::core::fmt::Debug;
}
