//!
//! Encoder contract shared by every request and response model.
//!
//! Models are plain structs deriving `serde::Serialize`, `serde::Deserialize` and
//! `model_derive::ApiModel`. The derive supplies [`ApiModel::MODEL_NAME`]; encoding and decoding
//! are provided here so they behave the same for every model:
//!
//! - keys are emitted in declaration order,
//! - required fields are always emitted,
//! - `Option` fields are emitted only when `Some`,
//! - `Nullable` fields are emitted only when touched, an explicit null is kept,
//! - a model emitting no key at all encodes to `{}`, or to `[]` when
//!   [`EncodeOptions::empty_as_array`] is requested.
//!

use error_stack::{Report, ResultExt};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "logs")]
use sdk_env::logger;

use crate::{
    errors::{CustomResult, ParsingError},
    ext_traits::Encode,
};

/// Options of [`ApiModel::encode_to_value_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Encode a model with no emitted key as `[]` instead of `{}`.
    pub empty_as_array: bool,
}

impl EncodeOptions {
    /// Options encoding an empty model as `[]`.
    pub const fn empty_as_array() -> Self {
        Self {
            empty_as_array: true,
        }
    }
}

/// Serialization capability of the API models.
pub trait ApiModel: Serialize + DeserializeOwned + std::fmt::Debug {
    /// Name of the model, as used in error reports and logs.
    const MODEL_NAME: &'static str;

    /// Encode into a JSON value, applying `options`.
    fn encode_to_value_with(&self, options: EncodeOptions) -> CustomResult<Value, ParsingError> {
        let value = self
            .encode_to_value()
            .change_context(ParsingError::EncodeError(Self::MODEL_NAME))?;

        let value = match value {
            Value::Object(map) if map.is_empty() && options.empty_as_array => {
                Value::Array(Vec::new())
            }
            other => other,
        };

        #[cfg(feature = "logs")]
        logger::debug!(
            model = Self::MODEL_NAME,
            keys = value.as_object().map_or(0, Map::len),
            "encoded api model"
        );

        Ok(value)
    }

    /// Encode into a JSON value, an empty model becoming `{}`.
    fn to_json_value(&self) -> CustomResult<Value, ParsingError> {
        self.encode_to_value_with(EncodeOptions::default())
    }

    /// Encode into a JSON document, applying `options`.
    fn to_json_string_with(&self, options: EncodeOptions) -> CustomResult<String, ParsingError> {
        self.encode_to_value_with(options)?
            .encode_to_string_of_json()
            .change_context(ParsingError::EncodeError(Self::MODEL_NAME))
    }

    /// Encode into a JSON document, an empty model becoming `{}`.
    fn to_json_string(&self) -> CustomResult<String, ParsingError> {
        self.to_json_string_with(EncodeOptions::default())
    }

    /// Encode into a query string, for endpoints taking their parameters in the URL.
    fn to_query_string(&self) -> CustomResult<String, ParsingError> {
        self.url_encode()
            .change_context(ParsingError::EncodeError(Self::MODEL_NAME))
    }

    /// Decode from a JSON value. `[]` is accepted as the empty model.
    fn decode_from_value(value: Value) -> CustomResult<Self, ParsingError> {
        let value = match value {
            Value::Array(items) if items.is_empty() => Value::Object(Map::new()),
            other => other,
        };

        let decoded = serde_json::from_value::<Self>(value)
            .map_err(|error| parse_failure(Self::MODEL_NAME, &error));

        #[cfg(feature = "logs")]
        match &decoded {
            Ok(_) => logger::debug!(model = Self::MODEL_NAME, "decoded api model"),
            Err(error) => logger::warn!(model = Self::MODEL_NAME, ?error, "api model decoding failed"),
        }

        decoded
    }

    /// Decode from a JSON document.
    fn decode_from_str(json: &str) -> CustomResult<Self, ParsingError> {
        let value = serde_json::from_str::<Value>(json)
            .map_err(|error| parse_failure(Self::MODEL_NAME, &error))
            .attach_printable("Body is not a JSON document")?;
        Self::decode_from_value(value)
    }

    /// Decode from a JSON document given as bytes, typically a response body.
    fn decode_from_slice(bytes: &[u8]) -> CustomResult<Self, ParsingError> {
        let value = serde_json::from_slice::<Value>(bytes)
            .map_err(|error| parse_failure(Self::MODEL_NAME, &error))
            .attach_printable("Body is not a JSON document")?;
        Self::decode_from_value(value)
    }
}

/// Report of a failed decode. The serde message is left out, as it quotes the offending input.
fn parse_failure(model: &'static str, error: &serde_json::Error) -> Report<ParsingError> {
    let position = match error.line() {
        0 => String::new(),
        line => format!(" at line {line} column {}", error.column()),
    };

    Report::new(ParsingError::StructParseFailure(model)).attach_printable(format!(
        "Unable to parse {model}: {:?} error{position}",
        error.classify()
    ))
}
