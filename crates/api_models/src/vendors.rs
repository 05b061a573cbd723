//! Vendors supplying a seller.

use std::collections::BTreeMap;

use common_utils::{
    custom_serde,
    nullable::Nullable,
    pii::{Email, PhoneNumber},
};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common::{Address, Error, SortOrder};

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
pub enum VendorStatus {
    Active,
    Inactive,
}

/// A contact person at a vendor.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct VendorContact {
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub email_address: Nullable<Email>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub phone_number: Nullable<PhoneNumber>,
    /// Whether the contact was removed from the vendor.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub removed: Nullable<bool>,
    /// Position of the contact in the vendor's contact list.
    pub ordinal: i32,
}

/// A supplier of goods or services to a seller.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Vendor {
    pub id: Option<String>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Unique among the seller's vendors.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<String>,
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub contacts: Nullable<Vec<VendorContact>>,
    /// The seller's account number at the vendor.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub account_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub note: Nullable<String>,
    /// Current version, required when updating the vendor.
    pub version: Option<i32>,
    pub status: Option<VendorStatus>,
}

/// Creates a single vendor.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateVendorRequest {
    pub idempotency_key: String,
    pub vendor: Option<Vendor>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateVendorResponse {
    pub errors: Option<Vec<Error>>,
    pub vendor: Option<Vendor>,
}

/// Creates vendors in bulk, keyed by the idempotency key of each creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BulkCreateVendorsRequest {
    pub vendors: BTreeMap<String, Vendor>,
}

/// Outcome of a bulk creation, keyed by the idempotency keys of the request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BulkCreateVendorsResponse {
    pub errors: Option<Vec<Error>>,
    pub responses: Option<BTreeMap<String, CreateVendorResponse>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RetrieveVendorResponse {
    pub errors: Option<Vec<Error>>,
    pub vendor: Option<Vendor>,
}

/// Updates a vendor. The vendor must carry its id and current version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateVendorRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub idempotency_key: Nullable<String>,
    pub vendor: Vendor,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateVendorResponse {
    pub errors: Option<Vec<Error>>,
    pub vendor: Option<Vendor>,
}

/// Vendors matching any of the names and any of the statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchVendorsRequestFilter {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub status: Nullable<Vec<VendorStatus>>,
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
pub enum SearchVendorsRequestSortField {
    Name,
    CreatedAt,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchVendorsRequestSort {
    pub field: Option<SearchVendorsRequestSortField>,
    pub order: Option<SortOrder>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchVendorsRequest {
    pub filter: Option<SearchVendorsRequestFilter>,
    pub sort: Option<SearchVendorsRequestSort>,
    pub cursor: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct SearchVendorsResponse {
    pub errors: Option<Vec<Error>>,
    pub vendors: Option<Vec<Vendor>>,
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::api_model::ApiModel;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_vendor_with_the_idempotency_key_only() {
        let request = CreateVendorRequest::new("abc-123");

        assert_eq!(
            request.to_json_string().unwrap(),
            r#"{"idempotency_key":"abc-123"}"#
        );
    }

    #[test]
    fn setting_the_vendor_adds_a_nested_object() {
        let mut request = CreateVendorRequest::new("abc-123");
        request.set_vendor(
            Vendor::new()
                .with_name("Joe's Fresh Seafood")
                .with_status(VendorStatus::Active)
                .with_contacts(vec![VendorContact::new(1)
                    .with_name("Joe Burrow")
                    .with_email_address("joe@joesfreshseafood.com")]),
        );

        assert_eq!(
            request.to_json_value().unwrap(),
            json!({
                "idempotency_key": "abc-123",
                "vendor": {
                    "name": "Joe's Fresh Seafood",
                    "contacts": [{
                        "name": "Joe Burrow",
                        "email_address": "joe@joesfreshseafood.com",
                        "ordinal": 1,
                    }],
                    "status": "ACTIVE",
                },
            })
        );
    }

    #[test]
    fn update_clears_the_note_with_an_explicit_null() {
        let mut vendor = Vendor::new().with_version(2);
        vendor.set_id("INV_V_JDKYHBWT1D4F8MFH63DBMEN8Y4".to_string());
        vendor.set_note(None);

        let request = UpdateVendorRequest::new(vendor);

        assert_eq!(
            request.to_json_value().unwrap(),
            json!({
                "vendor": {
                    "id": "INV_V_JDKYHBWT1D4F8MFH63DBMEN8Y4",
                    "note": null,
                    "version": 2,
                },
            })
        );
    }

    #[test]
    fn bulk_create_keys_vendors_by_idempotency_key() {
        let request = BulkCreateVendorsRequest::new(BTreeMap::from([
            ("key-b".to_string(), Vendor::new().with_name("B")),
            ("key-a".to_string(), Vendor::new().with_name("A")),
        ]));

        assert_eq!(
            request.to_json_string().unwrap(),
            r#"{"vendors":{"key-a":{"name":"A"},"key-b":{"name":"B"}}}"#
        );
    }

    #[test]
    fn search_filter_sends_empty_lists() {
        let filter = SearchVendorsRequestFilter::new().with_status(Vec::new());
        let request = SearchVendorsRequest::new().with_filter(filter);

        assert_eq!(
            request.to_json_value().unwrap(),
            json!({ "filter": { "status": [] } })
        );
    }

    #[test]
    fn contact_phone_numbers_are_masked() {
        let contact = VendorContact::new(0).with_phone_number("+1-212-555-4240");
        assert!(!format!("{contact:?}").contains("555"));
    }
}
