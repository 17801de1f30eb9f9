use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `kind` names the variant shared by `ReflectKind`, `ReflectRef` and
/// `ReflectMut`, e.g. `Struct`.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: Ident) -> TokenStream {
    let sf_reflect_path = meta.sf_reflect_path();
    let reflect_ = crate::path::reflect_(sf_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sf_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sf_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sf_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }
        }
    }
}
