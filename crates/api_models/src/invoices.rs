//! Invoices: requests for payment sent to a customer for an order.

use common_utils::{
    custom_serde,
    nullable::Nullable,
    pii::{Email, PhoneNumber},
};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common::{Address, Error, Money};

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
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Scheduled,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Canceled,
    Failed,
    PaymentPending,
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
pub enum InvoiceRequestType {
    Balance,
    Deposit,
    Installment,
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
pub enum InvoiceDeliveryMethod {
    Email,
    ShareManually,
    Sms,
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
pub enum InvoiceCustomFieldPlacement {
    AboveLineItems,
    BelowLineItems,
}

/// Payment methods the customer can pay the invoice with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct InvoiceAcceptedPaymentMethods {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub card: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub square_gift_card: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub bank_account: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub buy_now_pay_later: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cash_app_pay: Nullable<bool>,
}

/// A labelled block of text shown on the invoice.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct InvoiceCustomField {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub label: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub value: Nullable<String>,
    pub placement: Option<InvoiceCustomFieldPlacement>,
}

/// The customer the invoice is sent to.
///
/// Only `customer_id` is sent on creation; the platform fills the contact details from the
/// customer profile.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct InvoiceRecipient {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_id: Nullable<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email_address: Option<Email>,
    pub address: Option<Address>,
    pub phone_number: Option<PhoneNumber>,
    pub company_name: Option<String>,
}

/// One payment of the invoice's payment schedule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct InvoicePaymentRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub uid: Nullable<String>,
    pub request_type: Option<InvoiceRequestType>,
    /// Due date in `YYYY-MM-DD` format, in the invoice's location time zone.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub due_date: Nullable<String>,
    /// Amount of a deposit or an installment. Mutually exclusive with
    /// `percentage_requested`.
    pub fixed_amount_requested_money: Option<Money>,
    /// Percentage of the order total, such as `"25"`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub percentage_requested: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub tipping_enabled: Nullable<bool>,
    /// Card on file charged automatically on the due date.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub card_id: Nullable<String>,
    pub computed_amount_money: Option<Money>,
    pub total_completed_amount_money: Option<Money>,
    pub rounding_adjustment_included_money: Option<Money>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Invoice {
    pub id: Option<String>,
    /// Current version, required when updating, publishing or canceling the invoice.
    pub version: Option<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub order_id: Nullable<String>,
    pub primary_recipient: Option<InvoiceRecipient>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub payment_requests: Nullable<Vec<InvoicePaymentRequest>>,
    pub delivery_method: Option<InvoiceDeliveryMethod>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub invoice_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub description: Nullable<String>,
    /// When the invoice is processed. Defaults to the time it is published.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub scheduled_at: Nullable<OffsetDateTime>,
    pub public_url: Option<String>,
    pub next_payment_amount_money: Option<Money>,
    pub status: Option<InvoiceStatus>,
    pub timezone: Option<String>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub accepted_payment_methods: Option<InvoiceAcceptedPaymentMethods>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub custom_fields: Nullable<Vec<InvoiceCustomField>>,
    /// Date of the sale or service, in `YYYY-MM-DD` format.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sale_or_service_date: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub store_payment_method_enabled: Nullable<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateInvoiceRequest {
    pub invoice: Invoice,
    pub idempotency_key: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateInvoiceResponse {
    pub errors: Option<Vec<Error>>,
    pub invoice: Option<Invoice>,
}

/// Sparse update of an invoice: only the touched fields of `invoice` change, and the
/// fields named in `fields_to_clear` are removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateInvoiceRequest {
    pub invoice: Invoice,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub idempotency_key: Nullable<String>,
    /// Paths of the fields to clear, such as `payments_requests[0].due_date`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub fields_to_clear: Nullable<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateInvoiceResponse {
    pub errors: Option<Vec<Error>>,
    pub invoice: Option<Invoice>,
}

/// Publishes a draft invoice, which sends it to the recipient or schedules its processing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct PublishInvoiceRequest {
    pub version: i32,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub idempotency_key: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct PublishInvoiceResponse {
    pub errors: Option<Vec<Error>>,
    pub invoice: Option<Invoice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CancelInvoiceRequest {
    pub version: i32,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CancelInvoiceResponse {
    pub errors: Option<Vec<Error>>,
    pub invoice: Option<Invoice>,
}

/// Query of the invoice listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListInvoicesRequest {
    pub location_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub limit: Nullable<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListInvoicesResponse {
    pub errors: Option<Vec<Error>>,
    pub invoices: Option<Vec<Invoice>>,
    pub cursor: Option<String>,
}
