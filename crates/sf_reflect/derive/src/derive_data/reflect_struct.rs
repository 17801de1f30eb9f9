use proc_macro2::Span;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// One named field of the input struct.
pub(crate) struct StructField {
    pub ident: Ident,
    pub ty: Type,
    /// Descriptor name: the `rename` value or the identifier.
    pub key: String,
    pub ignored: bool,
}

/// A struct with named fields, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "#[derive(Reflect)] does not support tuple structs",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "#[derive(Reflect)] does not support unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "#[derive(Reflect)] only supports structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "#[derive(Reflect)] only supports structs with named fields",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let mut meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen: Vec<String> = Vec::new();

        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let ignored = field_attrs.ignore.is_some();

            let (key, span) = match &field_attrs.rename {
                Some(lit) => (lit.value(), lit.span()),
                None => (ident.to_string(), ident.span()),
            };

            if !ignored {
                if seen.contains(&key) {
                    return Err(syn::Error::new(
                        span,
                        format!("duplicate field name `{key}` in #[derive(Reflect)]"),
                    ));
                }
                seen.push(key.clone());
            }

            fields.push(StructField {
                ident,
                ty: field.ty.clone(),
                key,
                ignored,
            });
        }

        meta.set_active_types(
            fields
                .iter()
                .filter(|field| !field.ignored)
                .map(|field| field.ty.clone())
                .collect(),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField> {
        self.fields.iter().filter(|field| !field.ignored)
    }

    /// Descriptor names as string literals.
    pub fn active_keys(&self) -> Vec<LitStr> {
        self.active_fields()
            .map(|field| LitStr::new(&field.key, Span::call_site()))
            .collect()
    }
}
