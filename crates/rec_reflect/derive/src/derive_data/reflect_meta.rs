use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Path, Visibility};

use super::TypeAttributes;

/// Type level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    rec_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    vis: &'a Visibility,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("rec_reflect_path", &self.rec_reflect_path.to_token_stream())
            .field("ident", self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, vis: &'a Visibility) -> Self {
        Self {
            rec_reflect_path: crate::path::rec_reflect(),
            attrs,
            ident,
            vis,
        }
    }

    #[inline]
    pub fn rec_reflect_path(&self) -> &Path {
        &self.rec_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// The ident of the record type.
    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn vis(&self) -> &Visibility {
        self.vis
    }

    /// Ident of the generated field token struct, `<Name>Fields`.
    pub fn fields_ident(&self) -> Ident {
        quote::format_ident!("{}Fields", crate::utils::ident_name(self.ident))
    }

    /// Expression of the full type path, a `&'static str`.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let name = crate::utils::ident_name(self.ident);
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #name)
                }
            }
        }
    }

    /// Expression of the declared name, a `&'static str`.
    pub fn type_name(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                let name = path.rsplit_once("::").map_or(path.as_str(), |(_, name)| name);
                name.to_token_stream()
            }
            None => crate::utils::ident_name(self.ident).to_token_stream(),
        }
    }

    /// Expression of the module path, an `Option<&'static str>`.
    pub fn module_path(&self) -> TokenStream {
        use crate::path::fp::OptionFP;

        match &self.attrs.type_path {
            Some(lit) => match lit.value().rsplit_once("::") {
                Some((module, _)) => quote!(#OptionFP::Some(#module)),
                None => quote!(#OptionFP::None),
            },
            None => quote!(#OptionFP::Some(::core::module_path!())),
        }
    }
}
