//! Refunds of payments.

use common_utils::{custom_serde, nullable::Nullable};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    common::{Error, Money, SortOrder},
    payments::ProcessingFee,
};

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
pub enum RefundStatus {
    Pending,
    Completed,
    Rejected,
    Failed,
}

/// A refund of a payment, in full or in part.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct PaymentRefund {
    pub id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub status: Nullable<RefundStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    /// Whether the refund was made without a linked payment.
    pub unlinked: Option<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub destination_type: Nullable<String>,
    pub amount_money: Money,
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub processing_fee: Nullable<Vec<ProcessingFee>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub payment_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub order_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub reason: Nullable<String>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub team_member_id: Option<String>,
}

/// Refunds a payment, or sends an unlinked refund to a payment source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RefundPaymentRequest {
    pub idempotency_key: String,
    /// Must not exceed the amount still refundable on the payment.
    pub amount_money: Money,
    pub app_fee_money: Option<Money>,
    /// The payment to refund. Required unless `unlinked` is `true`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub payment_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub destination_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub unlinked: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub reason: Nullable<String>,
    /// Refunds the payment only if it is still at this version.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub payment_version_token: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub team_member_id: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RefundPaymentResponse {
    pub errors: Option<Vec<Error>>,
    pub refund: Option<PaymentRefund>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct GetPaymentRefundResponse {
    pub errors: Option<Vec<Error>>,
    pub refund: Option<PaymentRefund>,
}

/// Query of the refund listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListPaymentRefundsRequest {
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub begin_time: Nullable<OffsetDateTime>,
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub end_time: Nullable<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sort_order: Nullable<SortOrder>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub status: Nullable<RefundStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub source_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub limit: Nullable<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListPaymentRefundsResponse {
    pub errors: Option<Vec<Error>>,
    pub refunds: Option<Vec<PaymentRefund>>,
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::api_model::ApiModel;
    use serde_json::json;

    use super::*;
    use crate::common::Currency;

    #[test]
    fn refund_request_sends_the_required_fields_first() {
        let request = RefundPaymentRequest::new("refund-1", Money::new(500, Currency::Eur))
            .with_payment_id("R2B3Z8WMVt3EAmzYWLZvz7Y69EbZY")
            .with_reason("Returned goods");

        assert_eq!(
            request.to_json_string().unwrap(),
            concat!(
                r#"{"idempotency_key":"refund-1","amount_money":{"amount":500,"currency":"EUR"},"#,
                r#""payment_id":"R2B3Z8WMVt3EAmzYWLZvz7Y69EbZY","reason":"Returned goods"}"#
            )
        );
    }

    #[test]
    fn refund_response_keeps_explicit_nulls() {
        let body = json!({
            "refund": {
                "id": "b27436d1-7f8e-41a3-872b-3d0b9d6bd9cc",
                "status": "PENDING",
                "amount_money": { "amount": 100, "currency": "USD" },
                "payment_id": "UNOE3kv2BZwqHlJ830RCt5YCuaB",
                "order_id": null,
                "created_at": "2024-02-01T20:42:36.021Z"
            }
        });

        let response = RefundPaymentResponse::decode_from_value(body).unwrap();
        let refund = response.refund().unwrap();

        assert_eq!(refund.status().get(), Some(&RefundStatus::Pending));
        assert!(refund.order_id().is_null());
        assert!(refund.reason().is_unset());
        assert_eq!(
            refund.to_json_value().unwrap()["order_id"],
            serde_json::Value::Null
        );
    }

    #[test]
    fn list_refunds_query_string() {
        let request = ListPaymentRefundsRequest::new()
            .with_status(RefundStatus::Completed)
            .with_cursor("next page");

        assert_eq!(
            request.to_query_string().unwrap(),
            "cursor=next+page&status=COMPLETED"
        );
    }
}
