#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use api_models::{
    bookings::{
        Booking, CancelBookingRequest, CreateBookingRequest, ListBookingsRequest,
        UpdateBookingRequest,
    },
    catalog::{
        BatchDeleteCatalogObjectsRequest, BatchRetrieveCatalogObjectsRequest, CatalogObject,
        CatalogObjectType, ListCatalogRequest, UpsertCatalogObjectRequest,
    },
    common::{Address, Country, Currency, Money},
    disputes::{CreateDisputeEvidenceTextRequest, ListDisputesRequest},
    invoices::{
        CancelInvoiceRequest, CreateInvoiceRequest, Invoice, InvoicePaymentRequest,
        ListInvoicesRequest, PublishInvoiceRequest, UpdateInvoiceRequest,
    },
    loyalty::{
        AccumulateLoyaltyPointsRequest, AdjustLoyaltyPointsRequest, CreateLoyaltyAccountRequest,
        LoyaltyAccount, LoyaltyEventAccumulatePoints, LoyaltyEventAdjustPoints,
        SearchLoyaltyAccountsRequest,
    },
    payments::{
        CompletePaymentRequest, CreatePaymentRequest, ListPaymentsRequest, UpdatePaymentRequest,
    },
    refunds::{ListPaymentRefundsRequest, RefundPaymentRequest},
    vendors::{
        BulkCreateVendorsRequest, CreateVendorRequest, SearchVendorsRequest,
        SearchVendorsRequestFilter, SearchVendorsRequestSort, UpdateVendorRequest, Vendor,
        VendorContact, VendorStatus,
    },
};
use common_utils::{
    api_model::{ApiModel, EncodeOptions},
    errors::{CustomResult, ParsingError},
    generate_idempotency_key,
    nullable::Nullable,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use test_case::test_case;

#[test]
fn create_vendor_request_sends_only_the_idempotency_key() {
    let request = CreateVendorRequest::new("abc-123");

    let value = request.to_json_value().unwrap();
    assert_eq!(value, json!({ "idempotency_key": "abc-123" }));
    assert!(value.get("vendor").is_none());
}

#[test]
fn setting_the_vendor_adds_it_as_a_nested_object() {
    let mut request = CreateVendorRequest::new("abc-123");
    request.set_vendor(Vendor::new().with_name("Acme Supplies"));

    assert_eq!(
        request.to_json_value().unwrap(),
        json!({ "idempotency_key": "abc-123", "vendor": { "name": "Acme Supplies" } })
    );

    request.set_vendor(None);
    assert_eq!(
        request.to_json_value().unwrap(),
        json!({ "idempotency_key": "abc-123" })
    );
}

#[test]
fn required_only_models_emit_exactly_their_required_keys() {
    let key = generate_idempotency_key();

    let payment = CreatePaymentRequest::new("cnon:card-nonce-ok", key.clone())
        .to_json_value()
        .unwrap();
    assert_eq!(
        payment.as_object().unwrap().keys().collect::<Vec<_>>(),
        ["source_id", "idempotency_key"]
    );

    let update = UpdatePaymentRequest::new(key.clone()).to_json_value().unwrap();
    assert_eq!(update, json!({ "idempotency_key": key }));
}

#[test_case(CreateBookingRequest::new(Booking::new()).to_json_value(), &["booking"] ; "create booking")]
#[test_case(UpdateBookingRequest::new(Booking::new()).to_json_value(), &["booking"] ; "update booking")]
#[test_case(CancelBookingRequest::new().to_json_value(), &[] ; "cancel booking")]
#[test_case(ListBookingsRequest::new().to_json_value(), &[] ; "list bookings")]
#[test_case(BatchDeleteCatalogObjectsRequest::new().to_json_value(), &[] ; "batch delete catalog objects")]
#[test_case(
    BatchRetrieveCatalogObjectsRequest::new(vec!["W62UWFY35CWMYGVWK6TWJDNI".to_string()]).to_json_value(),
    &["object_ids"] ;
    "batch retrieve catalog objects"
)]
#[test_case(
    UpsertCatalogObjectRequest::new("key-1", CatalogObject::new(CatalogObjectType::Item, "#coffee")).to_json_value(),
    &["idempotency_key", "object"] ;
    "upsert catalog object"
)]
#[test_case(ListCatalogRequest::new().to_json_value(), &[] ; "list catalog")]
#[test_case(ListDisputesRequest::new().to_json_value(), &[] ; "list disputes")]
#[test_case(
    CreateDisputeEvidenceTextRequest::new("key-1", "1Z8888888888888888").to_json_value(),
    &["idempotency_key", "evidence_text"] ;
    "create dispute evidence text"
)]
#[test_case(InvoicePaymentRequest::new().to_json_value(), &[] ; "invoice payment request")]
#[test_case(CreateInvoiceRequest::new(Invoice::new()).to_json_value(), &["invoice"] ; "create invoice")]
#[test_case(UpdateInvoiceRequest::new(Invoice::new()).to_json_value(), &["invoice"] ; "update invoice")]
#[test_case(PublishInvoiceRequest::new(1).to_json_value(), &["version"] ; "publish invoice")]
#[test_case(CancelInvoiceRequest::new(1).to_json_value(), &["version"] ; "cancel invoice")]
#[test_case(ListInvoicesRequest::new("ES0RJRZYEC39A").to_json_value(), &["location_id"] ; "list invoices")]
#[test_case(
    CreateLoyaltyAccountRequest::new(LoyaltyAccount::new("d619f755"), "key-1").to_json_value(),
    &["loyalty_account", "idempotency_key"] ;
    "create loyalty account"
)]
#[test_case(SearchLoyaltyAccountsRequest::new().to_json_value(), &[] ; "search loyalty accounts")]
#[test_case(
    AccumulateLoyaltyPointsRequest::new(LoyaltyEventAccumulatePoints::new(), "key-1", "P034NEENMD09F").to_json_value(),
    &["accumulate_points", "idempotency_key", "location_id"] ;
    "accumulate loyalty points"
)]
#[test_case(
    AdjustLoyaltyPointsRequest::new("key-1", LoyaltyEventAdjustPoints::new(10)).to_json_value(),
    &["idempotency_key", "adjust_points"] ;
    "adjust loyalty points"
)]
#[test_case(
    CreatePaymentRequest::new("cnon:card-nonce-ok", "key-1").to_json_value(),
    &["source_id", "idempotency_key"] ;
    "create payment"
)]
#[test_case(UpdatePaymentRequest::new("key-1").to_json_value(), &["idempotency_key"] ; "update payment")]
#[test_case(CompletePaymentRequest::new().to_json_value(), &[] ; "complete payment")]
#[test_case(ListPaymentsRequest::new().to_json_value(), &[] ; "list payments")]
#[test_case(
    RefundPaymentRequest::new("key-1", Money::new(100, Currency::Usd)).to_json_value(),
    &["idempotency_key", "amount_money"] ;
    "refund payment"
)]
#[test_case(ListPaymentRefundsRequest::new().to_json_value(), &[] ; "list payment refunds")]
#[test_case(CreateVendorRequest::new("key-1").to_json_value(), &["idempotency_key"] ; "create vendor")]
#[test_case(BulkCreateVendorsRequest::new(BTreeMap::new()).to_json_value(), &["vendors"] ; "bulk create vendors")]
#[test_case(UpdateVendorRequest::new(Vendor::new()).to_json_value(), &["vendor"] ; "update vendor")]
#[test_case(SearchVendorsRequestFilter::new().to_json_value(), &[] ; "search vendors filter")]
#[test_case(SearchVendorsRequestSort::new().to_json_value(), &[] ; "search vendors sort")]
#[test_case(SearchVendorsRequest::new().to_json_value(), &[] ; "search vendors")]
fn request_models_emit_exactly_their_required_keys(
    encoded: CustomResult<Value, ParsingError>,
    required: &[&str],
) {
    let encoded = encoded.unwrap();
    let keys = encoded
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>();

    assert_eq!(keys, required);
}

#[test]
fn explicit_null_is_sent_and_unset_is_omitted() {
    let mut booking = Booking::new();
    booking.set_customer_note(None);
    let request = UpdateBookingRequest::new(booking.clone());
    assert_eq!(
        request.to_json_value().unwrap(),
        json!({ "booking": { "customer_note": null } })
    );

    booking.set_customer_note("Ring twice".to_string());
    booking.unset_customer_note();
    let request = UpdateBookingRequest::new(booking);
    assert_eq!(request.to_json_value().unwrap(), json!({ "booking": {} }));
}

#[test]
fn empty_batch_delete_follows_the_requested_empty_form() {
    let request = BatchDeleteCatalogObjectsRequest::default();

    assert_eq!(request.to_json_string().unwrap(), "{}");
    assert_eq!(
        request
            .to_json_string_with(EncodeOptions::empty_as_array())
            .unwrap(),
        "[]"
    );

    let mut request = request;
    request.set_object_ids(vec!["W62UWFY35CWMYGVWK6TWJDNI".to_string()]);
    assert_eq!(
        request
            .to_json_string_with(EncodeOptions::empty_as_array())
            .unwrap(),
        r#"{"object_ids":["W62UWFY35CWMYGVWK6TWJDNI"]}"#
    );
}

#[test]
fn nested_models_keep_their_own_tri_state() {
    let mut address = Address::new().with_country(Country::Gb);
    address.set_postal_code(None);
    let mut invoice = Invoice::new().with_version(4);
    invoice.set_title("Spring order".to_string());
    invoice.set_custom_fields(None);

    let request = UpdateInvoiceRequest::new(invoice);
    let decoded = UpdateInvoiceRequest::decode_from_str(&request.to_json_string().unwrap()).unwrap();

    assert_eq!(decoded, request);
    assert!(decoded.invoice().custom_fields().is_null());
    assert!(decoded.invoice().description().is_unset());
    assert!(address.postal_code().is_null());
}

fn nullable_of<T: std::fmt::Debug + Clone>(
    value: impl Strategy<Value = T>,
) -> impl Strategy<Value = Nullable<T>> {
    prop_oneof![
        Just(Nullable::Unset),
        Just(Nullable::Null),
        value.prop_map(Nullable::Value),
    ]
}

fn vendor_strategy() -> impl Strategy<Value = Vendor> {
    (
        nullable_of("[A-Za-z ']{1,24}"),
        nullable_of("[0-9]{4,12}"),
        nullable_of(".{0,40}"),
        proptest::option::of(prop_oneof![
            Just(VendorStatus::Active),
            Just(VendorStatus::Inactive)
        ]),
        proptest::option::of(0..i32::MAX),
        nullable_of(proptest::collection::vec(
            (0..10_i32, nullable_of("[a-z]{1,10}@example\\.com")),
            0..3,
        )),
    )
        .prop_map(|(name, account_number, note, status, version, contacts)| {
            let mut vendor = Vendor::new();
            vendor.name = name;
            vendor.account_number = account_number;
            vendor.note = note;
            vendor.status = status;
            vendor.version = version;
            vendor.contacts = contacts.map(|contacts| {
                contacts
                    .into_iter()
                    .map(|(ordinal, email)| {
                        let mut contact = VendorContact::new(ordinal);
                        contact.email_address = email.map(Into::into);
                        contact
                    })
                    .collect()
            });
            vendor
        })
}

proptest! {
    #[test]
    fn vendors_survive_a_round_trip(vendor in vendor_strategy()) {
        let request = CreateVendorRequest::new("abc-123").with_vendor(vendor);
        let encoded = request.to_json_string().unwrap();

        prop_assert_eq!(CreateVendorRequest::decode_from_str(&encoded).unwrap(), request);
    }

    #[test]
    fn money_survives_a_round_trip(amount in any::<i64>()) {
        let money = Money::new(amount, Currency::Cad);
        let decoded = Money::decode_from_value(money.to_json_value().unwrap()).unwrap();

        prop_assert_eq!(decoded, money);
    }
}
