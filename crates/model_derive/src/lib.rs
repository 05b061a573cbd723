//! Derive macro for the API models.

mod macros;

/// Turn a struct with named fields into an API model.
///
/// Every field is classified by its type:
///
/// - `Option<T>`: optional, omitted from the payload when `None`. The field must carry
///   `#[serde(skip_serializing_if = "Option::is_none")]`, usually added by
///   `#[serde_with::skip_serializing_none]` placed above the derives.
/// - `Nullable<T>`: optional and tri-state, omitted when unset and sent as `null` when
///   explicitly cleared. The field must carry
///   `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`.
/// - anything else: required, always emitted and taken by `new`.
///
/// Generated items:
///
/// - `new(..)` taking the required fields in declaration order, the optional ones starting
///   untouched,
/// - a getter named after each field,
/// - `set_<field>` for every field,
/// - `with_<field>`, a consuming builder, for optional fields,
/// - `unset_<field>` for `Nullable` fields,
/// - `Default` when the struct has no required field,
/// - `common_utils::api_model::ApiModel`, with the struct name as `MODEL_NAME`.
///
/// The struct must also derive `Debug`, `serde::Serialize` and `serde::Deserialize`.
///
/// # Example
///
/// ```
/// use common_utils::{api_model::ApiModel, nullable::Nullable};
/// use model_derive::ApiModel;
/// use serde::{Deserialize, Serialize};
///
/// #[serde_with::skip_serializing_none]
/// #[derive(Debug, Serialize, Deserialize, ApiModel)]
/// pub struct UpdateNoteRequest {
///     pub idempotency_key: String,
///     pub author: Option<String>,
///     #[serde(default, skip_serializing_if = "Nullable::is_unset")]
///     pub note: Nullable<String>,
/// }
///
/// let mut request = UpdateNoteRequest::new("key-1").with_author("sam");
/// request.set_note(None);
///
/// assert_eq!(
///     request.to_json_string().unwrap(),
///     r#"{"idempotency_key":"key-1","author":"sam","note":null}"#
/// );
/// ```
#[proc_macro_derive(ApiModel)]
pub fn api_model_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    macros::api_model_derive_inner(&input)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}
