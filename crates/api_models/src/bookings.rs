//! Appointment bookings.

use common_utils::{custom_serde, nullable::Nullable};
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
pub enum BookingStatus {
    Pending,
    CancelledByCustomer,
    CancelledBySeller,
    Declined,
    Accepted,
    NoShow,
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
pub enum BookingCreatorDetailsCreatorType {
    TeamMember,
    Customer,
}

/// Where the appointment takes place.
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
pub enum BusinessAppointmentSettingsBookingLocationType {
    BusinessLocation,
    CustomerLocation,
    Phone,
}

/// A service booked within a booking, with the team member providing it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct AppointmentSegment {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub duration_minutes: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub service_variation_id: Nullable<String>,
    pub team_member_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub service_variation_version: Nullable<i64>,
    /// Time between the segment and the next one, in minutes.
    pub intermission_minutes: Option<i32>,
    pub any_team_member: Option<bool>,
}

/// Who created the booking.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct BookingCreatorDetails {
    pub creator_type: Option<BookingCreatorDetailsCreatorType>,
    /// Set when `creator_type` is `TEAM_MEMBER`.
    pub team_member_id: Option<String>,
    /// Set when `creator_type` is `CUSTOMER`.
    pub customer_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct Booking {
    pub id: Option<String>,
    /// Current version, required when updating the booking.
    pub version: Option<i32>,
    pub status: Option<BookingStatus>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "custom_serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub start_at: Nullable<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_id: Nullable<String>,
    /// Note from the customer, visible to the seller.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_note: Nullable<String>,
    /// Note from the seller, not visible to the customer.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub seller_note: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub appointment_segments: Nullable<Vec<AppointmentSegment>>,
    pub transition_time_minutes: Option<i32>,
    pub all_day: Option<bool>,
    pub location_type: Option<BusinessAppointmentSettingsBookingLocationType>,
    pub creator_details: Option<BookingCreatorDetails>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateBookingRequest {
    pub idempotency_key: Option<String>,
    pub booking: Booking,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CreateBookingResponse {
    pub errors: Option<Vec<Error>>,
    pub booking: Option<Booking>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct RetrieveBookingResponse {
    pub errors: Option<Vec<Error>>,
    pub booking: Option<Booking>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateBookingRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub idempotency_key: Nullable<String>,
    pub booking: Booking,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct UpdateBookingResponse {
    pub errors: Option<Vec<Error>>,
    pub booking: Option<Booking>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CancelBookingRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub idempotency_key: Nullable<String>,
    /// Cancels the booking only if it is still at this version.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub booking_version: Nullable<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct CancelBookingResponse {
    pub errors: Option<Vec<Error>>,
    pub booking: Option<Booking>,
}

/// Query of the booking listing endpoint, sent as a query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListBookingsRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub limit: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub cursor: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub team_member_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub location_id: Nullable<String>,
    /// Earliest start time of the bookings. Defaults to now.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub start_at_min: Nullable<OffsetDateTime>,
    /// Latest start time of the bookings. Defaults to 31 days after `start_at_min`.
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_unset",
        with = "custom_serde::rfc3339::nullable"
    )]
    pub start_at_max: Nullable<OffsetDateTime>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ApiModel)]
pub struct ListBookingsResponse {
    pub errors: Option<Vec<Error>>,
    pub bookings: Option<Vec<Booking>>,
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::api_model::ApiModel;
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    fn booking() -> Booking {
        Booking::new()
            .with_start_at(datetime!(2024-11-26 13:00:00 UTC))
            .with_location_id("LEQHH0YY8B42M")
            .with_customer_id("EX2QSVGTZN4K1E5QE1CBFNVQ8M")
            .with_appointment_segments(vec![AppointmentSegment::new("TMXUrsBWWcHTt79t")
                .with_duration_minutes(60)
                .with_service_variation_id("RU3PBTZTK7DXZDQFCJHOK2MC")
                .with_service_variation_version(1_599_775_456_731_i64)])
    }

    #[test]
    fn create_booking() {
        let request = CreateBookingRequest::new(booking());

        assert_eq!(
            request.to_json_value().unwrap(),
            json!({
                "booking": {
                    "start_at": "2024-11-26T13:00:00Z",
                    "location_id": "LEQHH0YY8B42M",
                    "customer_id": "EX2QSVGTZN4K1E5QE1CBFNVQ8M",
                    "appointment_segments": [{
                        "duration_minutes": 60,
                        "service_variation_id": "RU3PBTZTK7DXZDQFCJHOK2MC",
                        "team_member_id": "TMXUrsBWWcHTt79t",
                        "service_variation_version": 1_599_775_456_731_i64,
                    }],
                },
            })
        );
    }

    #[test]
    fn update_clears_the_seller_note() {
        let mut booking = booking().with_version(1);
        booking.set_seller_note(None);
        booking.unset_appointment_segments();
        booking.unset_customer_id();

        let value = UpdateBookingRequest::new(booking).to_json_value().unwrap();

        assert_eq!(
            value,
            json!({
                "booking": {
                    "version": 1,
                    "start_at": "2024-11-26T13:00:00Z",
                    "location_id": "LEQHH0YY8B42M",
                    "seller_note": null,
                },
            })
        );
    }

    #[test]
    fn cancel_booking_without_fields_is_empty() {
        assert_eq!(CancelBookingRequest::default().to_json_string().unwrap(), "{}");
        assert_eq!(
            CancelBookingRequest::new()
                .with_booking_version(3)
                .to_json_string()
                .unwrap(),
            r#"{"booking_version":3}"#
        );
    }

    #[test]
    fn decodes_a_booking_round_trip() {
        let booking = booking()
            .with_status(BookingStatus::Accepted)
            .with_creator_details(
                BookingCreatorDetails::new()
                    .with_creator_type(BookingCreatorDetailsCreatorType::TeamMember)
                    .with_team_member_id("TMXUrsBWWcHTt79t"),
            );
        let response = RetrieveBookingResponse::new().with_booking(booking);

        let encoded = response.to_json_string().unwrap();
        assert_eq!(RetrieveBookingResponse::decode_from_str(&encoded).unwrap(), response);
    }

    #[test]
    fn list_bookings_query_string() {
        let request = ListBookingsRequest::new()
            .with_limit(10)
            .with_start_at_min(datetime!(2024-11-01 00:00:00 UTC));

        assert_eq!(
            request.to_query_string().unwrap(),
            "limit=10&start_at_min=2024-11-01T00%3A00%3A00Z"
        );
    }
}
