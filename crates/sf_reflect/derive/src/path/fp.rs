//! Fully qualified paths of `core` items, immune to user shadowing.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

pub(crate) struct OptionFP;

impl ToTokens for OptionFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::option::Option).to_tokens(tokens);
    }
}
