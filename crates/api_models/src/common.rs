//! Types shared by every API domain: money, addresses, reported errors and the enumerated
//! constants they use.

use common_utils::nullable::Nullable;
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};

/// An amount of money, in the smallest denomination of its currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Money {
    /// Amount in minor units, `100` being `$1.00` for `USD`.
    pub amount: i64,
    /// Currency of the amount.
    pub currency: Currency,
}

/// A physical address.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Address {
    /// The first line of the address, usually the street number and name.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub address_line_1: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub address_line_2: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub address_line_3: Nullable<String>,
    /// The city or town of the address.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub locality: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sublocality: Nullable<String>,
    /// A civil region within the country, such as a state or a province.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub administrative_district_level_1: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub postal_code: Nullable<String>,
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub first_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub last_name: Nullable<String>,
}

/// An error reported by the platform, attached to the `errors` list of a response.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Error {
    /// The high-level category of the error.
    pub category: ErrorCategory,
    /// The specific code of the error.
    pub code: ErrorCode,
    /// A human-readable description of the error, for debugging.
    pub detail: Option<String>,
    /// The name of the request field the error relates to, if any.
    pub field: Option<String>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    ApiError,
    AuthenticationError,
    InvalidRequestError,
    RateLimitError,
    PaymentMethodError,
    RefundError,
    MerchantSubscriptionError,
    ExternalVendorError,
}

/// Code of a reported error.
///
/// The platform adds codes over time; codes this crate does not know decode to
/// [`ErrorCode::Unknown`] holding the code as sent, instead of failing the whole response.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InternalServerError,
    Unauthorized,
    AccessTokenExpired,
    AccessTokenRevoked,
    Forbidden,
    InsufficientScopes,
    BadRequest,
    MissingRequiredParameter,
    IncorrectType,
    InvalidValue,
    InvalidEnumValue,
    InvalidCursor,
    InvalidTime,
    InvalidEmailAddress,
    InvalidPhoneNumber,
    ValueTooLong,
    ValueTooHigh,
    ValueTooLow,
    IdempotencyKeyReused,
    VersionMismatch,
    CardExpired,
    CardDeclined,
    CvvFailure,
    AddressVerificationFailure,
    InsufficientFunds,
    GenericDecline,
    RefundAmountInvalid,
    RefundAlreadyPending,
    NotFound,
    Conflict,
    RateLimited,
    ServiceUnavailable,
    GatewayTimeout,
    #[serde(untagged)]
    #[strum(default)]
    Unknown(String),
}

/// ISO 4217 currency code.
///
/// Codes this crate does not list decode to [`Currency::Unknown`], which encodes back to the
/// same code.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Aud,
    Brl,
    Cad,
    Chf,
    Cny,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Inr,
    Jpy,
    Mxn,
    Nok,
    Nzd,
    Sek,
    Sgd,
    Usd,
    #[serde(untagged)]
    #[strum(default)]
    Unknown(String),
}

/// ISO 3166 Alpha-2 country code.
///
/// Codes this crate does not list decode to [`Country::Unknown`], which encodes back to the
/// same code.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Country {
    Au,
    Ca,
    De,
    Es,
    Fr,
    Gb,
    Ie,
    It,
    Jp,
    Mx,
    Nz,
    Us,
    #[serde(untagged)]
    #[strum(default)]
    Unknown(String),
}

/// Order of the results of a list or search endpoint.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Desc,
    Asc,
}
