use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, Path, Type};

use super::TypeAttributes;
use crate::utils::StringExpr;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    sf_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types needing `Reflect + Typed` bounds in generic impls.
    active_types: Vec<Type>,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "#[derive(Reflect)] does not support lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "#[derive(Reflect)] does not support const parameters",
                    ));
                }
            }
        }

        Ok(Self {
            sf_reflect_path: crate::path::sf_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        })
    }

    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn sf_reflect_path(&self) -> &Path {
        &self.sf_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Whether the type has type parameters, so path strings and infos
    /// must be built at run time and cached per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// The identifier without generics: last segment of a custom path, or
    /// the Rust identifier.
    pub fn type_ident(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(path) => {
                let last = path.segments.last().map(|s| s.ident.to_string());
                StringExpr::from_str(&last.unwrap_or_else(|| self.ident.to_string()))
            }
            None => StringExpr::from_str(&self.ident.to_string()),
        }
    }

    pub fn module_path(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(path) => {
                let count = path.segments.len() - 1;
                let module = path
                    .segments
                    .iter()
                    .take(count)
                    .map(|s| s.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                StringExpr::from_str(&module)
            }
            None => StringExpr::Const(quote!(::core::module_path!())),
        }
    }

    /// `module::Ident<T0, T1>` with full paths for parameters.
    pub fn type_path(&self) -> Vec<StringExpr> {
        let mut parts = vec![self.module_path(), StringExpr::from_str("::"), self.type_ident()];
        self.push_generic_suffix(&mut parts, quote!(type_path));
        parts
    }

    /// `Ident<T0, T1>` with short names for parameters.
    pub fn type_name(&self) -> Vec<StringExpr> {
        let mut parts = vec![self.type_ident()];
        self.push_generic_suffix(&mut parts, quote!(type_name));
        parts
    }

    fn push_generic_suffix(&self, parts: &mut Vec<StringExpr>, method: TokenStream) {
        let type_path_ = crate::path::type_path_(&self.sf_reflect_path);
        let mut params = self.generics.type_params().peekable();
        if params.peek().is_none() {
            return;
        }

        parts.push(StringExpr::from_str("<"));
        let mut first = true;
        for param in params {
            if !first {
                parts.push(StringExpr::from_str(", "));
            }
            first = false;
            let ident = &param.ident;
            parts.push(StringExpr::Borrowed(quote! {
                <#ident as #type_path_>::#method()
            }));
        }
        parts.push(StringExpr::from_str(">"));
    }

    /// Splits the generics for an impl block.
    ///
    /// With `type_path_only`, type parameters are bounded by `TypePath` alone.
    /// Otherwise they, and the active field types of a generic struct, are
    /// bounded by `Reflect + Typed`.
    pub fn split_generics(&self, type_path_only: bool) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = where_clause
            .map(|clause| clause.predicates.iter().map(ToTokens::to_token_stream).collect())
            .unwrap_or_default();

        let sf_reflect_path = &self.sf_reflect_path;
        let type_path_ = crate::path::type_path_(sf_reflect_path);
        let reflect_ = crate::path::reflect_(sf_reflect_path);
        let typed_ = crate::path::typed_(sf_reflect_path);

        for param in self.generics.type_params() {
            let ident = &param.ident;
            if type_path_only {
                predicates.push(quote!(#ident: #type_path_));
            } else {
                predicates.push(quote!(#ident: #reflect_ + #typed_));
            }
        }

        // Non-generic field types are checked by the compiler directly, and
        // bounding them would recurse on self-referential structs.
        if !type_path_only && self.impl_with_generic() {
            for ty in &self.active_types {
                predicates.push(quote!(#ty: #reflect_ + #typed_));
            }
        }

        let where_clause = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote!(where #(#predicates,)*)
        };

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_clause,
        )
    }
}
