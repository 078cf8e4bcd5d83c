//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Records which standard traits the type declares as available.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub clone: Option<Span>,
    pub debug: Option<Span>,
    pub eq: Option<Span>,
    pub cmp: Option<Span>,
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "a::b::Name")]`
    pub type_path: Option<LitStr>,
    pub avail_traits: TraitAvailableFlags,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let path = &meta.path;
        let span = Some(path.span());

        if path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            validate_type_path(&lit)?;
            if self.type_path.replace(lit).is_some() {
                return Err(meta.error("duplicate `type_path` attribute"));
            }
        } else if path.is_ident("clone") {
            self.avail_traits.clone = span;
        } else if path.is_ident("debug") {
            self.avail_traits.debug = span;
        } else if path.is_ident("partial_eq") {
            self.avail_traits.eq = span;
        } else if path.is_ident("partial_cmp") {
            self.avail_traits.cmp = span;
        } else {
            return Err(meta.error(
                "unsupported type attribute, expected one of \
                 `type_path`, `clone`, `debug`, `partial_eq`, `partial_cmp`",
            ));
        }

        Ok(())
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    let valid = !value.is_empty()
        && value
            .split("::")
            .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace));

    if valid {
        Ok(())
    } else {
        Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a `::` separated path, such as \"my_crate::Foo\"",
        ))
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`
    pub ignore: Option<Span>,
    /// `#[reflect(rename = "name")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        if let (Some(span), Some(_)) = (this.ignore, &this.rename) {
            return Err(syn::Error::new(span, "an ignored field cannot be renamed"));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("ignore") {
            self.ignore = Some(meta.path.span());
        } else if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "field name cannot be empty"));
            }
            if self.rename.replace(lit).is_some() {
                return Err(meta.error("duplicate `rename` attribute"));
            }
        } else {
            return Err(meta.error("unsupported field attribute, expected `ignore` or `rename`"));
        }

        Ok(())
    }
}
