//! Disputes (chargebacks) raised by cardholders, and the evidence a seller submits to
//! challenge them.

use common_utils::{custom_serde, nullable::Nullable};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    common::{Error, Money},
    payments::CardBrand,
};

/// Reason the cardholder gave to their bank for the dispute.
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
pub enum DisputeReason {
    AmountDiffers,
    Cancelled,
    Duplicate,
    NoKnowledge,
    NotAsDescribed,
    NotReceived,
    PaidByOtherMeans,
    CustomerRequestsCredit,
    EmvLiabilityShift,
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
pub enum DisputeState {
    InquiryEvidenceRequired,
    InquiryProcessing,
    InquiryClosed,
    EvidenceRequired,
    Processing,
    Won,
    Lost,
    Accepted,
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
pub enum DisputeEvidenceType {
    GenericEvidence,
    OnlineOrAppAccessLog,
    AuthorizationDocumentation,
    CancellationOrRefundDocumentation,
    CardholderCommunication,
    CardholderInformation,
    PurchaseAcknowledgement,
    DuplicateChargeDocumentation,
    ProductOrServiceDescription,
    Receipt,
    ServiceReceivedDocumentation,
    ProofOfDeliveryDocumentation,
    RelatedTransactionDocumentation,
    RebuttalExplanation,
    TrackingNumber,
}

/// The payment a dispute was raised against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct DisputedPayment {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub payment_id: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Dispute {
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub dispute_id: Nullable<String>,
    /// The disputed amount, which can be less than the payment amount.
    pub amount_money: Option<Money>,
    pub reason: Option<DisputeReason>,
    pub state: Option<DisputeState>,
    /// Deadline for submitting evidence.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub due_at: Nullable<OffsetDateTime>,
    pub disputed_payment: Option<DisputedPayment>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub evidence_ids: Nullable<Vec<String>>,
    pub card_brand: Option<CardBrand>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Id of the dispute at the card brand.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub brand_dispute_id: Nullable<String>,
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub reported_at: Nullable<OffsetDateTime>,
    pub version: Option<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct DisputeEvidenceFile {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub filename: Nullable<String>,
    /// MIME type of the file, such as `image/png`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub filetype: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct DisputeEvidence {
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub dispute_id: Nullable<String>,
    pub evidence_file: Option<DisputeEvidenceFile>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub evidence_text: Nullable<String>,
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub uploaded_at: Nullable<OffsetDateTime>,
    pub evidence_type: Option<DisputeEvidenceType>,
}

/// Query of the dispute listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListDisputesRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    /// Only disputes in this state. Defaults to every non-final state.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub states: Nullable<DisputeState>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListDisputesResponse {
    pub errors: Option<Vec<Error>>,
    pub disputes: Option<Vec<Dispute>>,
    pub cursor: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RetrieveDisputeResponse {
    pub errors: Option<Vec<Error>>,
    pub dispute: Option<Dispute>,
}

/// Response of accepting a dispute, which refunds the disputed amount to the cardholder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AcceptDisputeResponse {
    pub errors: Option<Vec<Error>>,
    pub dispute: Option<Dispute>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateDisputeEvidenceTextRequest {
    pub idempotency_key: String,
    pub evidence_type: Option<DisputeEvidenceType>,
    pub evidence_text: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateDisputeEvidenceTextResponse {
    pub errors: Option<Vec<Error>>,
    pub evidence: Option<DisputeEvidence>,
}

/// Response of submitting the uploaded evidence to the cardholder's bank.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SubmitEvidenceResponse {
    pub errors: Option<Vec<Error>>,
    pub dispute: Option<Dispute>,
}
