use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::OptionFP;
use crate::utils::{JoinedExpr, StringExpr};

fn static_path_cell(sf_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(sf_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

fn joined_body(sf_reflect_path: &syn::Path, parts: Vec<StringExpr>) -> TokenStream {
    match StringExpr::concat(parts, sf_reflect_path) {
        JoinedExpr::Static(tokens) => tokens,
        JoinedExpr::Owned(tokens) => static_path_cell(sf_reflect_path, tokens),
    }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let sf_reflect_path = meta.sf_reflect_path();
    let type_path_ = crate::path::type_path_(sf_reflect_path);

    let ident = meta.ident();
    let type_path = joined_body(sf_reflect_path, meta.type_path());
    let type_name = joined_body(sf_reflect_path, meta.type_name());
    let type_ident = meta.type_ident().into_borrowed();
    let module_path = meta.module_path().into_borrowed();

    let inline_flag = if meta.impl_with_generic() {
        TokenStream::new()
    } else {
        quote! { #[inline] }
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #OptionFP::Some(#module_path)
            }
        }
    }
}
