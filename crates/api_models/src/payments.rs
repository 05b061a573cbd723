//! Payments: taking, updating, completing and cancelling card payments.

use common_utils::{
    custom_serde,
    nullable::Nullable,
    pii::{Email, PaymentToken},
};
use masking::Secret;
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common::{Address, Error, Money, SortOrder};

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
pub enum PaymentStatus {
    Approved,
    Pending,
    Completed,
    Canceled,
    Failed,
}

/// Brand of a card.
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
pub enum CardBrand {
    OtherBrand,
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DiscoverDiners,
    Jcb,
    ChinaUnionpay,
    SquareGiftCard,
    SquareCapitalCard,
    Interac,
    Eftpos,
    Felica,
    Ebt,
}

/// A payment card, as seen by the platform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Card {
    pub id: Option<String>,
    pub card_brand: Option<CardBrand>,
    /// The last 4 digits of the card number.
    pub last_4: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub exp_month: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub exp_year: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cardholder_name: Nullable<String>,
    pub billing_address: Option<Address>,
    /// Identifies the card across merchants, without revealing its number.
    pub fingerprint: Option<Secret<String>>,
    /// The first six digits of the card number.
    pub bin: Option<String>,
}

/// Details of a payment taken with a card.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CardPaymentDetails {
    /// `AUTHORIZED`, `CAPTURED`, `VOIDED` or `FAILED`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub status: Nullable<String>,
    pub card: Option<Card>,
    /// How the card was entered: `KEYED`, `SWIPED`, `EMV`, `ON_FILE` or `CONTACTLESS`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub entry_method: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cvv_status: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub avs_status: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub statement_description: Nullable<String>,
}

/// A fee the platform charged for processing a payment or a refund.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ProcessingFee {
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub effective_at: Nullable<OffsetDateTime>,
    /// `INITIAL` or `ADJUSTMENT`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub r#type: Nullable<String>,
    /// Negative for fees refunded back to the seller.
    pub amount_money: Option<Money>,
}

/// A payment processed by the platform.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Payment {
    pub id: Option<String>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// The amount processed for this payment, not including the tip.
    pub amount_money: Option<Money>,
    pub tip_money: Option<Money>,
    /// `amount_money` plus `tip_money`.
    pub total_money: Option<Money>,
    pub app_fee_money: Option<Money>,
    pub approved_money: Option<Money>,
    pub processing_fee: Option<Vec<ProcessingFee>>,
    pub refunded_money: Option<Money>,
    pub status: Option<PaymentStatus>,
    /// Duration before a delayed capture payment is automatically canceled, in RFC 3339
    /// duration format such as `P1W3D`.
    pub delay_duration: Option<String>,
    /// `CARD`, `BANK_ACCOUNT`, `WALLET`, `CASH` or `EXTERNAL`.
    pub source_type: Option<String>,
    pub card_details: Option<CardPaymentDetails>,
    pub location_id: Option<String>,
    pub order_id: Option<String>,
    pub reference_id: Option<String>,
    pub customer_id: Option<String>,
    pub refund_ids: Option<Vec<String>>,
    pub buyer_email_address: Option<Email>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub note: Option<String>,
    pub receipt_number: Option<String>,
    pub receipt_url: Option<String>,
    /// Token of the current version of the payment, for optimistic concurrency.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub version_token: Nullable<String>,
}

/// Creates a payment from a payment source such as a card nonce or a card on file.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreatePaymentRequest {
    /// The payment source: a card nonce, a card on file id or `EXTERNAL`.
    pub source_id: PaymentToken,
    pub idempotency_key: String,
    pub amount_money: Option<Money>,
    pub tip_money: Option<Money>,
    pub app_fee_money: Option<Money>,
    pub delay_duration: Option<String>,
    /// When `false`, the payment is only authorized and must be completed later.
    pub autocomplete: Option<bool>,
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub location_id: Option<String>,
    pub reference_id: Option<String>,
    /// Token returned by the buyer verification flow.
    pub verification_token: Option<PaymentToken>,
    pub accept_partial_authorization: Option<bool>,
    pub buyer_email_address: Option<Email>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub note: Option<String>,
    pub statement_description_identifier: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreatePaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub payment: Option<Payment>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct GetPaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub payment: Option<Payment>,
}

/// Updates the amounts of an approved payment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdatePaymentRequest {
    pub payment: Option<Payment>,
    pub idempotency_key: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdatePaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub payment: Option<Payment>,
}

/// Completes (captures) an approved payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CompletePaymentRequest {
    /// Completes the payment only if it is still at this version.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub version_token: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CompletePaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub payment: Option<Payment>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CancelPaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub payment: Option<Payment>,
}

/// Query of the payment listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListPaymentsRequest {
    /// Start of the time range, inclusive. Defaults to one year ago.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub begin_time: Nullable<OffsetDateTime>,
    /// End of the time range, exclusive. Defaults to now.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub end_time: Nullable<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sort_order: Nullable<SortOrder>,
    /// Cursor returned by a previous call, to fetch the next page.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    /// Exact amount of the payments, in minor units.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub total: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub last_4: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub card_brand: Nullable<CardBrand>,
    /// Maximum number of results per page, capped at 100.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub limit: Nullable<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListPaymentsResponse {
    pub errors: Option<Vec<Error>>,
    pub payments: Option<Vec<Payment>>,
    /// Present when more results are available.
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::api_model::ApiModel;
    use masking::PeekInterface;
    use serde_json::json;
    use time::macros::datetime;

    use super::*;
    use crate::common::Currency;

    #[test]
    fn failed_decode_keeps_tokens_and_emails_out_of_the_report() {
        let error = CreatePaymentRequest::decode_from_value(json!({
            "source_id": "cnon:secret-card-nonce",
            "idempotency_key": "4935a656-a929-4792",
            "buyer_email_address": "buyer@example.com",
            "autocomplete": "not-a-bool",
        }))
        .unwrap_err();
        let report = format!("{error:?}");
        assert!(report.contains("CreatePaymentRequest"));
        assert!(!report.contains("secret-card-nonce"));
        assert!(!report.contains("buyer@example.com"));

        let error = CreatePaymentRequest::decode_from_value(json!({
            "source_id": "cnon:secret-card-nonce",
            "idempotency_key": "4935a656-a929-4792",
            "amount_money": "buyer@example.com",
        }))
        .unwrap_err();
        assert!(!format!("{error:?}").contains("buyer@example.com"));
    }

    #[test]
    fn create_payment_with_required_fields_only() {
        let request = CreatePaymentRequest::new("cnon:card-nonce-ok", "4935a656-a929-4792");

        assert_eq!(
            request.to_json_value().unwrap(),
            json!({
                "source_id": "cnon:card-nonce-ok",
                "idempotency_key": "4935a656-a929-4792",
            })
        );
    }

    #[test]
    fn payment_tokens_and_emails_are_masked_in_debug_output() {
        let request = CreatePaymentRequest::new("cnon:card-nonce-ok", "key")
            .with_verification_token("verf:abc123")
            .with_buyer_email_address("buyer@example.com")
            .with_amount_money(Money::new(200, Currency::Usd));

        let debug = format!("{request:?}");
        assert!(!debug.contains("card-nonce-ok"));
        assert!(!debug.contains("abc123"));
        assert!(!debug.contains("buyer@"));
        assert!(debug.contains("cnon:*** ***"));

        let value = request.to_json_value().unwrap();
        assert_eq!(value["verification_token"], "verf:abc123");
        assert_eq!(value["buyer_email_address"], "buyer@example.com");
    }

    #[test]
    fn decodes_a_payment_response() {
        let response = GetPaymentResponse::decode_from_value(json!({
            "payment": {
                "id": "GQTFp1ZlXdpoW4o6eGiZhbjosiDFf",
                "created_at": "2024-03-01T10:00:00.000Z",
                "amount_money": { "amount": 1000, "currency": "USD" },
                "status": "COMPLETED",
                "source_type": "CARD",
                "card_details": {
                    "status": "CAPTURED",
                    "card": {
                        "card_brand": "VISA",
                        "last_4": "1111",
                        "exp_month": 11,
                        "exp_year": 2028,
                        "fingerprint": "sq-1-abc"
                    },
                    "entry_method": "KEYED"
                },
                "version_token": null
            }
        }))
        .unwrap();

        let payment = response.payment().unwrap();
        assert_eq!(payment.status(), Some(&PaymentStatus::Completed));
        assert_eq!(payment.created_at(), Some(&datetime!(2024-03-01 10:00:00 UTC)));
        assert!(payment.version_token().is_null());

        let card = payment.card_details().and_then(CardPaymentDetails::card).unwrap();
        assert_eq!(card.card_brand(), Some(&CardBrand::Visa));
        assert_eq!(card.exp_year().get(), Some(&2028));
        assert_eq!(card.fingerprint().map(|f| f.peek().as_str()), Some("sq-1-abc"));
        assert!(response.errors().is_none());
    }

    #[test]
    fn list_payments_query_string() {
        let request = ListPaymentsRequest::new()
            .with_begin_time(datetime!(2024-01-01 00:00:00 UTC))
            .with_sort_order(SortOrder::Asc)
            .with_card_brand(CardBrand::AmericanExpress)
            .with_limit(50);

        assert_eq!(
            request.to_query_string().unwrap(),
            "begin_time=2024-01-01T00%3A00%3A00Z&sort_order=ASC&card_brand=AMERICAN_EXPRESS&limit=50"
        );
        assert_eq!(ListPaymentsRequest::default().to_query_string().unwrap(), "");
    }

    #[test]
    fn complete_payment_without_version_is_empty() {
        let mut request = CompletePaymentRequest::default();
        assert_eq!(request.to_json_string().unwrap(), "{}");

        request.set_version_token("1".to_string());
        assert_eq!(request.to_json_string().unwrap(), r#"{"version_token":"1"}"#);
    }
}
