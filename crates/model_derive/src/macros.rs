mod api_model;
mod helpers;

pub(crate) use self::api_model::api_model_derive_inner;
