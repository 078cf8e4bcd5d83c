use proc_macro2::TokenStream;
use syn::Ident;
use syn::ext::IdentExt;

/// Returns an empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Returns the ident text without a `r#` prefix.
#[inline]
pub(crate) fn ident_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}
