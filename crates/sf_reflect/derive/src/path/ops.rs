use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn reflect_ref_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::ops::StructFieldIter
    }
}
