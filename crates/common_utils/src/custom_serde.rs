//! Custom serialization/deserialization implementations.

/// Use the well-known RFC 3339 format when serializing and deserializing an
/// [`OffsetDateTime`][OffsetDateTime].
///
/// [OffsetDateTime]: ::time::OffsetDateTime
pub mod rfc3339 {
    use serde::{ser::Error as _, Deserializer, Serialize, Serializer};
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};

    /// Serialize an [`OffsetDateTime`] using the well-known RFC 3339 format.
    pub fn serialize<S>(date_time: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        date_time
            .format(&Rfc3339)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    /// Deserialize an [`OffsetDateTime`] from its RFC 3339 representation.
    pub fn deserialize<'a, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'a>,
    {
        time::serde::rfc3339::deserialize(deserializer)
    }

    /// Use the well-known RFC 3339 format when serializing and deserializing an
    /// [`Option<OffsetDateTime>`][OffsetDateTime].
    ///
    /// Pair with `#[serde(default)]`, since a field annotated with `with` is no longer
    /// treated as optional by serde.
    ///
    /// [OffsetDateTime]: ::time::OffsetDateTime
    pub mod option {
        use serde::{Deserializer, Serializer};
        use time::OffsetDateTime;

        /// Serialize an [`Option<OffsetDateTime>`] using the well-known RFC 3339 format.
        pub fn serialize<S>(
            date_time: &Option<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            time::serde::rfc3339::option::serialize(date_time, serializer)
        }

        /// Deserialize an [`Option<OffsetDateTime>`] from its RFC 3339 representation.
        pub fn deserialize<'a, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
        where
            D: Deserializer<'a>,
        {
            time::serde::rfc3339::option::deserialize(deserializer)
        }
    }

    /// Use the well-known RFC 3339 format when serializing and deserializing a tri-state
    /// [`Nullable<OffsetDateTime>`][crate::nullable::Nullable].
    pub mod nullable {
        use serde::{Deserializer, Serializer};
        use time::OffsetDateTime;

        use crate::nullable::Nullable;

        /// Serialize a [`Nullable<OffsetDateTime>`] using the well-known RFC 3339 format.
        pub fn serialize<S>(
            date_time: &Nullable<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            time::serde::rfc3339::option::serialize(&date_time.get().copied(), serializer)
        }

        /// Deserialize a [`Nullable<OffsetDateTime>`]; a present `null` becomes
        /// [`Nullable::Null`].
        pub fn deserialize<'a, D>(deserializer: D) -> Result<Nullable<OffsetDateTime>, D::Error>
        where
            D: Deserializer<'a>,
        {
            time::serde::rfc3339::option::deserialize(deserializer).map(Nullable::from)
        }
    }
}
