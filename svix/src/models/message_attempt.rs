//! Delivery attempt payloads.
//!
//! Status-like fields are sent by the service as small integer codes, not
//! strings. Unknown codes fail to decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter};

use super::MessageOut;

/// Declares an enum whose wire form is an `i16` code. Each variant's code is
/// written once and drives the discriminant, `TryFrom<i16>` and serde.
macro_rules! int_coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
        #[repr(i16)]
        $(#[$meta])*
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)+
        }

        impl $name {
            /// The numeric code used on the wire.
            pub fn code(self) -> i16 {
                self as i16
            }
        }

        impl TryFrom<i16> for $name {
            type Error = i16;

            fn try_from(code: i16) -> Result<Self, Self::Error> {
                $(if code == Self::$variant as i16 {
                    return Ok(Self::$variant);
                })+
                Err(code)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i16(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = i16::deserialize(deserializer)?;
                Self::try_from(code).map_err(|c| {
                    serde::de::Error::custom(format!(
                        "`{c}` is not a valid {}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

int_coded_enum! {
    /// Delivery status of a message to an endpoint.
    #[strum(serialize_all = "lowercase")]
    pub enum MessageStatus {
        Success = 0,
        Pending = 1,
        Fail = 2,
        Sending = 3,
    }
}

int_coded_enum! {
    /// Class of the HTTP status an endpoint answered with.
    pub enum StatusCodeClass {
        /// No response was received.
        CodeNone = 0,
        Code1xx = 100,
        Code2xx = 200,
        Code3xx = 300,
        Code4xx = 400,
        Code5xx = 500,
    }
}

int_coded_enum! {
    /// What triggered a delivery attempt.
    #[strum(serialize_all = "lowercase")]
    pub enum MessageAttemptTriggerType {
        Scheduled = 0,
        Manual = 1,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAttemptOut {
    /// The attempt's ID.
    pub id: String,
    pub msg_id: String,
    pub endpoint_id: String,
    pub url: String,
    pub response: String,
    pub response_status_code: i16,
    pub response_duration_ms: i64,
    pub status: MessageStatus,
    pub trigger_type: MessageAttemptTriggerType,
    pub timestamp: DateTime<Utc>,
    /// The attempted message, included when listing with `with_msg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<MessageOut>,
}

/// A message together with its delivery state for one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointMessageOut {
    #[serde(flatten)]
    pub msg: MessageOut,
    pub status: MessageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_attempt: Option<DateTime<Utc>>,
}

/// An endpoint together with the delivery state of one message to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEndpointOut {
    /// The endpoint's ID.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub url: String,
    pub description: String,
    pub version: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    pub status: MessageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_attempt: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
