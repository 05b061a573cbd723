//!
//! Tri-state field type for partial-update semantics.
//!
//! The platform distinguishes a key that is absent from a request (leave the stored value as is)
//! from a key that is present with `null` (clear the stored value). [`Nullable`] carries that
//! distinction through the type system:
//!
//! | state          | serialized as        |
//! |----------------|----------------------|
//! | `Unset`        | key omitted          |
//! | `Null`         | `"key": null`        |
//! | `Value(v)`     | `"key": v`           |
//!
//! A field of this type must be annotated with
//! `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`, which `derive(ApiModel)`
//! enforces.
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that was never touched, explicitly set to null, or set to a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Never set, omitted from the wire.
    #[default]
    Unset,
    /// Explicitly set to null, sent as `null`.
    Null,
    /// Set to a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// The stored value, `None` when unset or null.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Mark the field as touched: `Some` stores the value, `None` stores an explicit null.
    pub fn set(&mut self, value: Option<T>) {
        *self = value.into();
    }

    /// Return the field to the untouched state.
    pub fn unset(&mut self) {
        *self = Self::Unset;
    }

    /// Replace the field with `Unset`, returning its previous state.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Whether the field was never touched.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether the field was explicitly set to null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the field holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrowing view of the field.
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(value),
        }
    }

    /// Map the stored value, keeping `Unset` and `Null` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(f(value)),
        }
    }

    /// The stored value, dropping the distinction between unset and null.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// `None` when unset, `Some(None)` when null, `Some(Some(value))` otherwise.
    pub fn into_touched(self) -> Option<Option<T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Unset fields are skipped by `skip_serializing_if`; reaching here means the
            // annotation is missing, and null is the closest the wire format has.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
