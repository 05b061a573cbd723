//!
//! Serde-related.
//!

pub use serde::{de, Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{PeekInterface, Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d by [`serde`].
///
/// Types marked with this trait receive a [`Serialize`] impl for `Secret<T>`.
/// All types which impl `DeserializeOwned` receive a [`Deserialize`] impl.
///
/// A `Secret` is serialized in exposed form: its only consumer is the request body sent to the
/// payments platform. Masking applies to formatting, not to the wire.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for Value {}
impl SerializableSecret for String {}
impl SerializableSecret for u8 {}
impl SerializableSecret for u16 {}
impl SerializableSecret for i32 {}
impl SerializableSecret for i64 {}
impl<T: SerializableSecret> SerializableSecret for Vec<T> {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret + Serialize + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}
