#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod api_model;
pub mod custom_serde;
pub mod errors;
pub mod ext_traits;
pub mod nullable;
pub mod pii;

/// Date-time utilities.
pub mod date_time {
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};

    use crate::errors::{CustomResult, ParsingError};

    /// Format a timestamp the way the platform expects it in query strings and bodies.
    pub fn format_rfc3339(date_time: OffsetDateTime) -> CustomResult<String, ParsingError> {
        use error_stack::ResultExt;

        date_time
            .format(&Rfc3339)
            .change_context(ParsingError::DateTimeParsingError)
    }
}

/// Generate a fresh idempotency key.
///
/// Keys are random v4 UUIDs (36 characters), short enough for every endpoint of the platform.
/// Retrying a request must reuse the key of the first attempt.
#[inline]
pub fn generate_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
