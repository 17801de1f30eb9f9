use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;

/// A string-valued expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Known at compile time: a literal, or a macro such as `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` computed at run time, e.g. `<T as TypePath>::type_path()`.
    Borrowed(TokenStream),
}

impl StringExpr {
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Tokens evaluating to a `&'static str`.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
        }
    }

    /// Joins `parts` into one expression.
    ///
    /// All-constant input folds into `concat!`, which stays a `&'static str`.
    /// Otherwise the result is an owned `String` built at run time, and the
    /// caller must cache it (see `GenericTypePathCell`).
    pub fn concat(parts: Vec<StringExpr>, sf_reflect_path: &syn::Path) -> JoinedExpr {
        if parts.iter().all(|part| matches!(part, StringExpr::Const(_))) {
            let inner = parts.into_iter().map(StringExpr::into_borrowed);
            JoinedExpr::Static(quote! { ::core::concat!( #(#inner),* ) })
        } else {
            let concat_ = crate::path::concat_(sf_reflect_path);
            let inner = parts.into_iter().map(StringExpr::into_borrowed);
            JoinedExpr::Owned(quote! { #concat_(&[ #(#inner),* ]) })
        }
    }
}

/// Result of [`StringExpr::concat`].
pub(crate) enum JoinedExpr {
    Static(TokenStream),
    Owned(TokenStream),
}
