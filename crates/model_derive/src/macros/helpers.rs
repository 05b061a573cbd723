use proc_macro2::Span;
use syn::{parse::Parse, punctuated::Punctuated, spanned::Spanned, Attribute, Token};

/// Creates a new `syn::Error` with the given `span` and `message`.
pub(super) fn syn_error(span: Span, message: &str) -> syn::Error {
    syn::Error::new(span, message)
}

/// Parse every `#[<ident>(..)]` attribute of `attrs` as a comma separated list of `T`.
pub(super) fn get_metadata_inner<'a, T: Parse + Spanned>(
    ident: &str,
    attrs: impl IntoIterator<Item = &'a Attribute>,
) -> syn::Result<Vec<T>> {
    attrs
        .into_iter()
        .filter(|attr| attr.path().is_ident(ident))
        .try_fold(Vec::new(), |mut vec, attr| {
            vec.extend(attr.parse_args_with(Punctuated::<T, Token![,]>::parse_terminated)?);
            Ok(vec)
        })
}

/// Returns the named fields of a struct, or an error for enums, unions and tuple structs.
pub(super) fn get_struct_fields(
    data: &syn::Data,
) -> syn::Result<Punctuated<syn::Field, syn::token::Comma>> {
    if let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(syn::FieldsNamed { ref named, .. }),
        ..
    }) = data
    {
        Ok(named.to_owned())
    } else {
        Err(syn_error(
            Span::call_site(),
            "This macro only supports structs with named fields",
        ))
    }
}

/// Returns the last segment of a path type along with its first generic argument, if any.
///
/// `Option<Vec<String>>` yields `("Option", Some(Vec<String>))`, `i64` yields `("i64", None)`.
pub(super) fn get_outer_type(ty: &syn::Type) -> Option<(syn::Ident, Option<syn::Type>)> {
    let syn::Type::Path(syn::TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    let inner = match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => {
            args.args.iter().find_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty.clone()),
                _ => None,
            })
        }
        _ => None,
    };
    Some((segment.ident.clone(), inner))
}

/// Keys of the `#[serde(..)]` attributes on a field, such as `default` or
/// `skip_serializing_if`.
pub(super) fn get_serde_keys(attrs: &[Attribute]) -> syn::Result<Vec<String>> {
    Ok(get_metadata_inner::<syn::Meta>("serde", attrs)?
        .iter()
        .filter_map(|meta| meta.path().get_ident().map(ToString::to_string))
        .collect())
}
