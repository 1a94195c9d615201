//! Tri-state field values for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be left out, sent as `null`, or sent with a value.
///
/// Patch payloads need three states: an absent field leaves the stored
/// value untouched, an explicit `null` clears it, and a value replaces it.
/// Fields of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`.
///
/// ## Examples
///
/// ```rust
/// use svix::models::{ApplicationPatch, Nullable};
///
/// let patch = ApplicationPatch {
///     uid: Nullable::Null,
///     rate_limit: Nullable::Value(10),
///     ..Default::default()
/// };
/// let json = serde_json::to_value(&patch).unwrap();
/// assert_eq!(json, serde_json::json!({ "uid": null, "rateLimit": 10 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The field is not sent.
    Absent,
    /// The field is sent as `null`.
    Null,
    /// The field is sent with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the field is left out.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field is an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if one is set.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapses `Absent` and `Null` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `None` maps to an explicit `null`, not to an absent field.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

/// Generates all three states, for property tests of patch payloads.
#[cfg(test)]
pub(crate) fn arb_nullable<T, S>(
    inner: S,
) -> impl proptest::strategy::Strategy<Value = Nullable<T>>
where
    T: Clone + std::fmt::Debug,
    S: proptest::strategy::Strategy<Value = T>,
{
    use proptest::prelude::*;

    prop_oneof![
        Just(Nullable::Absent),
        Just(Nullable::Null),
        inner.prop_map(Nullable::Value),
    ]
}
