//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Container attributes: `#[reflect(type_path = "a::b::Name")]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<Path>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if result.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    let path: Path = lit.parse().map_err(|_| {
                        syn::Error::new(lit.span(), "`type_path` must be a path like `a::b::Name`")
                    })?;
                    if path.segments.len() < 2 {
                        return Err(syn::Error::new(
                            lit.span(),
                            "`type_path` needs at least one module segment",
                        ));
                    }
                    result.type_path = Some(path);
                    Ok(())
                } else {
                    Err(meta.error("unsupported container attribute, expected `type_path`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field attributes: `#[reflect(rename = "key")]`, `#[reflect(ignore)]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "`rename` must not be empty"));
                    }
                    result.rename = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("ignore") {
                    result.ignore = Some(meta.input.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `rename` or `ignore`"))
                }
            })?;
        }

        if let (Some(rename), Some(_)) = (&result.rename, result.ignore) {
            return Err(syn::Error::new(
                rename.span(),
                "an ignored field cannot be renamed",
            ));
        }

        Ok(result)
    }
}
