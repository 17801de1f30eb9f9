use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::info::ReflectKind
    }
}
