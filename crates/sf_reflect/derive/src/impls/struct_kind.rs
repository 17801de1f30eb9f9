use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Index};

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, struct_info_tokens(info));
    let reflect_trait_tokens =
        impl_trait_reflect(meta, Ident::new("Struct", Span::call_site()));
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// Tokens building the `TypeInfo::Struct` for `Typed`.
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let sf_reflect_path = info.meta().sf_reflect_path();
    let type_info_ = crate::path::type_info_(sf_reflect_path);
    let struct_info_ = crate::path::struct_info_(sf_reflect_path);
    let named_field_ = crate::path::named_field_(sf_reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = &field.ty;
        let key = &field.key;
        quote! {
            #named_field_::new::<#ty>(#key)
        }
    });

    quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields),*
        ]))
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let sf_reflect_path = meta.sf_reflect_path();
    let struct_ = crate::path::struct_(sf_reflect_path);
    let reflect_ = crate::path::reflect_(sf_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(sf_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sf_reflect_path);
    let option_ = OptionFP;

    let field_keys = info.active_keys();
    let field_idents = info.active_fields().map(|field| &field.ident).collect::<Vec<_>>();
    let field_indices = (0..field_idents.len()).map(Index::from).collect::<Vec<_>>();
    let field_count = field_idents.len();

    let fields_ref = field_idents
        .iter()
        .map(|ident| quote!(#reflect_::as_reflect(&self.#ident)))
        .collect::<Vec<_>>();
    let fields_mut = field_idents
        .iter()
        .map(|ident| quote!(#reflect_::as_reflect_mut(&mut self.#ident)))
        .collect::<Vec<_>>();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &#macro_utils_::str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_keys => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &#macro_utils_::str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_keys => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: #macro_utils_::usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: #macro_utils_::usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: #macro_utils_::usize) -> #option_<&#macro_utils_::str> {
                match index {
                    #(#field_indices => #option_::Some(#field_keys),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> #macro_utils_::usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
