//! Loyalty accounts and the point events recorded on them.

use common_utils::{custom_serde, nullable::Nullable, pii::PhoneNumber};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common::Error;

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
pub enum LoyaltyEventType {
    AccumulatePoints,
    CreateReward,
    RedeemReward,
    DeleteReward,
    AdjustPoints,
    ExpirePoints,
    Other,
    AccumulatePromotionPoints,
}

/// The phone number a loyalty account is reachable by.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyAccountMapping {
    pub id: Option<String>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Phone number in E.164 format, such as `+14155551234`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub phone_number: Nullable<PhoneNumber>,
}

/// Points of an account expiring at the same time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyAccountExpiringPointDeadline {
    pub points: i32,
    #[serde(with = "custom_serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyAccount {
    pub id: Option<String>,
    pub program_id: String,
    /// Available points.
    pub balance: Option<i32>,
    /// Points earned over the lifetime of the account.
    pub lifetime_points: Option<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_id: Nullable<String>,
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub enrolled_at: Nullable<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub mapping: Option<LoyaltyAccountMapping>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub expiring_point_deadlines: Nullable<Vec<LoyaltyAccountExpiringPointDeadline>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyEventAccumulatePoints {
    pub loyalty_program_id: Option<String>,
    /// Points to add. Mutually exclusive with `order_id`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub points: Nullable<i32>,
    /// Order to compute the points from, following the program's accrual rules.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub order_id: Nullable<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyEventAdjustPoints {
    pub loyalty_program_id: Option<String>,
    /// Points to add, or to remove when negative.
    pub points: i32,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub reason: Nullable<String>,
}

/// A change of points on a loyalty account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyEvent {
    pub id: String,
    pub r#type: LoyaltyEventType,
    #[serde(with = "custom_serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Set when `type` is `ACCUMULATE_POINTS`.
    pub accumulate_points: Option<LoyaltyEventAccumulatePoints>,
    /// Set when `type` is `ADJUST_POINTS`.
    pub adjust_points: Option<LoyaltyEventAdjustPoints>,
    pub loyalty_account_id: String,
    pub location_id: Option<String>,
    /// `SQUARE` or `LOYALTY_API`.
    pub source: Option<String>,
}

/// Accounts matching any of the mappings or any of the customer ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct LoyaltyAccountQuery {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub mappings: Nullable<Vec<LoyaltyAccountMapping>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_ids: Nullable<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateLoyaltyAccountRequest {
    pub loyalty_account: LoyaltyAccount,
    pub idempotency_key: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateLoyaltyAccountResponse {
    pub errors: Option<Vec<Error>>,
    pub loyalty_account: Option<LoyaltyAccount>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RetrieveLoyaltyAccountResponse {
    pub errors: Option<Vec<Error>>,
    pub loyalty_account: Option<LoyaltyAccount>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchLoyaltyAccountsRequest {
    pub query: Option<LoyaltyAccountQuery>,
    pub limit: Option<i32>,
    pub cursor: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchLoyaltyAccountsResponse {
    pub errors: Option<Vec<Error>>,
    pub loyalty_accounts: Option<Vec<LoyaltyAccount>>,
    pub cursor: Option<String>,
}

/// Adds points to an account for a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AccumulateLoyaltyPointsRequest {
    pub accumulate_points: LoyaltyEventAccumulatePoints,
    pub idempotency_key: String,
    pub location_id: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AccumulateLoyaltyPointsResponse {
    pub errors: Option<Vec<Error>>,
    pub event: Option<LoyaltyEvent>,
    /// One event per program or promotion the purchase earned points in.
    pub events: Option<Vec<LoyaltyEvent>>,
}

/// Adds or removes points manually, outside of a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AdjustLoyaltyPointsRequest {
    pub idempotency_key: String,
    pub adjust_points: LoyaltyEventAdjustPoints,
    /// Allow the adjustment to leave the account with a negative balance.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub allow_negative_balance: Nullable<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AdjustLoyaltyPointsResponse {
    pub errors: Option<Vec<Error>>,
    pub event: Option<LoyaltyEvent>,
}
