use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, spanned::Spanned};

use super::helpers;

enum FieldKind {
    /// Always emitted, taken by `new`.
    Required,
    /// `Option<T>`, emitted only when `Some`.
    Optional(syn::Type),
    /// `Nullable<T>`, emitted only when touched.
    Nullable(syn::Type),
}

struct ModelField {
    ident: syn::Ident,
    ty: syn::Type,
    kind: FieldKind,
    docs: Vec<syn::Attribute>,
}

impl ModelField {
    fn from_field(field: syn::Field) -> syn::Result<Self> {
        let span = field.span();
        let syn::Field {
            attrs, ident, ty, ..
        } = field;
        let ident = ident.ok_or_else(|| helpers::syn_error(span, "Expected a named field"))?;

        let serde_keys = helpers::get_serde_keys(&attrs)?;
        let has_key = |key: &str| serde_keys.iter().any(|serde_key| serde_key == key);
        let custom_deserializer = has_key("with") || has_key("deserialize_with");

        let kind = match helpers::get_outer_type(&ty) {
            Some((outer, Some(inner))) if outer == "Option" => {
                if !has_key("skip_serializing_if") {
                    return Err(helpers::syn_error(
                        span,
                        "Optional fields must not be serialized when `None`, \
                         add `#[serde_with::skip_serializing_none]` above the derives",
                    ));
                }
                if custom_deserializer && !has_key("default") {
                    return Err(helpers::syn_error(
                        span,
                        "Optional fields with a custom deserializer need `#[serde(default)]`",
                    ));
                }
                FieldKind::Optional(inner)
            }
            Some((outer, Some(inner))) if outer == "Nullable" => {
                if !(has_key("default") && has_key("skip_serializing_if")) {
                    return Err(helpers::syn_error(
                        span,
                        "Nullable fields need \
                         `#[serde(default, skip_serializing_if = \"Nullable::is_unset\")]`",
                    ));
                }
                FieldKind::Nullable(inner)
            }
            _ => FieldKind::Required,
        };

        let docs = attrs
            .into_iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .collect();

        Ok(Self {
            ident,
            ty,
            kind,
            docs,
        })
    }

    fn is_required(&self) -> bool {
        matches!(self.kind, FieldKind::Required)
    }

    fn constructor_param(&self) -> Option<TokenStream> {
        let Self { ident, ty, .. } = self;
        self.is_required()
            .then(|| quote! { #ident: impl ::core::convert::Into<#ty> })
    }

    fn constructor_init(&self) -> TokenStream {
        let ident = &self.ident;
        if self.is_required() {
            quote! { #ident: #ident.into() }
        } else {
            quote! { #ident: ::core::default::Default::default() }
        }
    }

    fn accessors(&self) -> TokenStream {
        let Self {
            ident,
            ty,
            kind,
            docs,
        } = self;
        let name = ident.unraw();
        let setter = format_ident!("set_{}", name);
        let builder = format_ident!("with_{}", name);
        let unsetter = format_ident!("unset_{}", name);
        let set_doc = format!("Set `{name}`.");
        let with_doc = format!("Return the model with `{name}` set to a value.");

        match kind {
            FieldKind::Required => quote! {
                #(#docs)*
                pub fn #ident(&self) -> &#ty {
                    &self.#ident
                }

                #[doc = #set_doc]
                pub fn #setter(&mut self, #ident: impl ::core::convert::Into<#ty>) {
                    self.#ident = #ident.into();
                }
            },
            FieldKind::Optional(inner) => {
                let set_doc = format!("{set_doc} `None` removes the field from the payload.");
                quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> ::core::option::Option<&#inner> {
                        self.#ident.as_ref()
                    }

                    #[doc = #set_doc]
                    pub fn #setter(
                        &mut self,
                        #ident: impl ::core::convert::Into<::core::option::Option<#inner>>,
                    ) {
                        self.#ident = #ident.into();
                    }

                    #[doc = #with_doc]
                    pub fn #builder(mut self, #ident: impl ::core::convert::Into<#inner>) -> Self {
                        self.#ident = ::core::option::Option::Some(#ident.into());
                        self
                    }
                }
            }
            FieldKind::Nullable(inner) => {
                let set_doc = format!("{set_doc} `None` sends an explicit `null`.");
                let unset_doc = format!("Remove `{name}` from the payload.");
                quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> &#ty {
                        &self.#ident
                    }

                    #[doc = #set_doc]
                    pub fn #setter(
                        &mut self,
                        #ident: impl ::core::convert::Into<::core::option::Option<#inner>>,
                    ) {
                        self.#ident.set(#ident.into());
                    }

                    #[doc = #unset_doc]
                    pub fn #unsetter(&mut self) {
                        self.#ident.unset();
                    }

                    #[doc = #with_doc]
                    pub fn #builder(mut self, #ident: impl ::core::convert::Into<#inner>) -> Self {
                        self.#ident.set(::core::option::Option::Some(#ident.into()));
                        self
                    }
                }
            }
        }
    }
}

pub(crate) fn api_model_derive_inner(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let model_name = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = helpers::get_struct_fields(&input.data)?
        .into_iter()
        .map(ModelField::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let params = fields.iter().filter_map(ModelField::constructor_param);
    let inits = fields.iter().map(ModelField::constructor_init);
    let accessors = fields.iter().map(ModelField::accessors);
    let new_doc = format!(
        "Create a [`{model_name}`] from its required fields, optional fields left untouched."
    );

    let default_impl = (!fields.iter().any(ModelField::is_required)).then(|| {
        quote! {
            impl #impl_generics ::core::default::Default for #name #ty_generics #where_clause {
                fn default() -> Self {
                    Self::new()
                }
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = #new_doc]
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#params),*) -> Self {
                Self {
                    #(#inits),*
                }
            }

            #(#accessors)*
        }

        #default_impl

        #[automatically_derived]
        impl #impl_generics ::common_utils::api_model::ApiModel for #name #ty_generics #where_clause {
            const MODEL_NAME: &'static str = #model_name;
        }
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use syn::parse_quote;

    use super::*;

    fn expand(input: syn::DeriveInput) -> syn::Result<String> {
        api_model_derive_inner(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn required_fields_become_constructor_parameters() {
        let expanded = expand(parse_quote! {
            struct CreateNoteRequest {
                idempotency_key: String,
                #[serde(skip_serializing_if = "Option::is_none")]
                author: Option<String>,
            }
        })
        .unwrap();

        assert!(expanded.contains("pub fn new (idempotency_key : impl :: core :: convert :: Into < String >)"));
        assert!(expanded.contains("pub fn with_author"));
        assert!(expanded.contains("const MODEL_NAME : & 'static str = \"CreateNoteRequest\""));
        assert!(!expanded.contains(":: core :: default :: Default for"));
    }

    #[test]
    fn models_without_required_fields_get_a_default() {
        let expanded = expand(parse_quote! {
            struct DeleteNotesRequest {
                #[serde(default, skip_serializing_if = "Nullable::is_unset")]
                note_ids: Nullable<Vec<String>>,
            }
        })
        .unwrap();

        assert!(expanded.contains(":: core :: default :: Default for DeleteNotesRequest"));
        assert!(expanded.contains("pub fn unset_note_ids"));
    }

    #[test]
    fn raw_identifiers_get_plain_accessor_names() {
        let expanded = expand(parse_quote! {
            struct CatalogObject {
                r#type: String,
            }
        })
        .unwrap();

        assert!(expanded.contains("pub fn r#type"));
        assert!(expanded.contains("pub fn set_type"));
    }

    #[test]
    fn optional_fields_must_be_skipped_when_none() {
        let error = expand(parse_quote! {
            struct Note {
                author: Option<String>,
            }
        })
        .unwrap_err();

        assert!(error.to_string().contains("skip_serializing_none"));
    }

    #[test]
    fn nullable_fields_need_default_and_skip() {
        let error = expand(parse_quote! {
            struct Note {
                #[serde(skip_serializing_if = "Nullable::is_unset")]
                body: Nullable<String>,
            }
        })
        .unwrap_err();

        assert!(error.to_string().contains("Nullable fields need"));
    }

    #[test]
    fn optional_timestamps_need_default() {
        let error = expand(parse_quote! {
            struct Note {
                #[serde(skip_serializing_if = "Option::is_none", with = "rfc3339::option")]
                created_at: Option<OffsetDateTime>,
            }
        })
        .unwrap_err();

        assert!(error.to_string().contains("#[serde(default)]"));
    }

    #[test]
    fn enums_are_rejected() {
        assert!(expand(parse_quote! {
            enum Status { Active }
        })
        .is_err());
    }
}
