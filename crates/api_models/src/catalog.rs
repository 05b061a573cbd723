//! Catalog: items, their variations and categories.
//!
//! Every catalog entry travels as a [`CatalogObject`], whose `type` tells which of the
//! `*_data` fields holds its content.

use common_utils::{custom_serde, nullable::Nullable};
use model_derive::ApiModel;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common::{Error, Money};

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
pub enum CatalogObjectType {
    Item,
    Image,
    Category,
    ItemVariation,
    Tax,
    Discount,
    ModifierList,
    Modifier,
    PricingRule,
    ProductSet,
    TimePeriod,
    MeasurementUnit,
    ItemOption,
    ItemOptionVal,
    CustomAttributeDefinition,
    QuickAmountsSettings,
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
pub enum CatalogPricingType {
    FixedPricing,
    VariablePricing,
}

/// An entry of the catalog.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CatalogObject {
    pub r#type: CatalogObjectType,
    /// Platform id, or a temporary `#`-prefixed id when creating the object.
    pub id: String,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Version of the object, required when updating it.
    pub version: Option<i64>,
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub present_at_all_locations: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub present_at_location_ids: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub absent_at_location_ids: Nullable<Vec<String>>,
    pub item_data: Option<CatalogItem>,
    pub category_data: Option<CatalogCategory>,
    pub item_variation_data: Option<CatalogItemVariation>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub description: Nullable<String>,
    /// Short name shown on tiles of the point of sale.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub abbreviation: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub label_color: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub is_taxable: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub category_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub tax_ids: Nullable<Vec<String>>,
    /// Variations of the item, each an `ITEM_VARIATION` object.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub variations: Nullable<Vec<CatalogObject>>,
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub image_ids: Nullable<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CatalogCategory {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub image_ids: Nullable<Vec<String>>,
}

/// A sellable variation of an item, such as a size.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CatalogItemVariation {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub item_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sku: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub upc: Nullable<String>,
    /// Position of the variation among the item's variations.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub ordinal: Nullable<i32>,
    pub pricing_type: Option<CatalogPricingType>,
    /// Required when `pricing_type` is `FIXED_PRICING`.
    pub price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub track_inventory: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sellable: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub stockable: Nullable<bool>,
}

/// Maps the temporary id of an object of a request to the id the platform assigned.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CatalogIdMapping {
    pub client_object_id: Option<String>,
    pub object_id: Option<String>,
}

/// Deletes a set of objects, along with their children.
///
/// With no `object_ids`, the request encodes to `{}`; some callers send the empty form as
/// `[]`, see [`common_utils::api_model::EncodeOptions::empty_as_array`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BatchDeleteCatalogObjectsRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub object_ids: Nullable<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BatchDeleteCatalogObjectsResponse {
    pub errors: Option<Vec<Error>>,
    /// Ids of every deleted object, children included.
    pub deleted_object_ids: Option<Vec<String>>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BatchRetrieveCatalogObjectsRequest {
    pub object_ids: Vec<String>,
    /// Also return the objects referenced by the requested ones.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub include_related_objects: Nullable<bool>,
    /// Retrieve the objects as of this catalog version.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub catalog_version: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub include_deleted_objects: Nullable<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BatchRetrieveCatalogObjectsResponse {
    pub errors: Option<Vec<Error>>,
    pub objects: Option<Vec<CatalogObject>>,
    pub related_objects: Option<Vec<CatalogObject>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpsertCatalogObjectRequest {
    pub idempotency_key: String,
    /// The object to create or update. New objects use a `#`-prefixed temporary id.
    pub object: CatalogObject,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpsertCatalogObjectResponse {
    pub errors: Option<Vec<Error>>,
    pub catalog_object: Option<CatalogObject>,
    pub id_mappings: Option<Vec<CatalogIdMapping>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct DeleteCatalogObjectResponse {
    pub errors: Option<Vec<Error>>,
    pub deleted_object_ids: Option<Vec<String>>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

/// Query of the catalog listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListCatalogRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    /// Comma separated object types, such as `ITEM,CATEGORY`.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub types: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub catalog_version: Nullable<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListCatalogResponse {
    pub errors: Option<Vec<Error>>,
    pub cursor: Option<String>,
    pub objects: Option<Vec<CatalogObject>>,
}
