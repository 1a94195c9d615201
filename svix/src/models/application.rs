//! Application payloads.
//!
//! An application is where messages are sent to; usually one per customer of
//! the calling platform.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationIn {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u16>,
    /// Optional unique identifier for the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl ApplicationIn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOut {
    /// The application's ID.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u16>,
    pub metadata: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of an application. Only set fields are changed; `Null`
/// clears a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub rate_limit: Nullable<u16>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nullable::arb_nullable;
    use proptest::collection::hash_map;
    use proptest::option;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_application_in_skips_unset_fields() {
        let json = serde_json::to_value(ApplicationIn::new("Acme")).unwrap();
        assert_eq!(json, json!({ "name": "Acme" }));
    }

    #[test]
    fn test_application_out_requires_id() {
        let body = json!({
            "name": "Acme",
            "metadata": {},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<ApplicationOut>(body).is_err());
    }

    #[test]
    fn test_application_out_decodes() {
        let body = json!({
            "id": "app_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "uid": "acme",
            "name": "Acme",
            "rateLimit": 100,
            "metadata": { "tier": "gold" },
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        });
        let app: ApplicationOut = serde_json::from_value(body).unwrap();
        assert_eq!(app.uid.as_deref(), Some("acme"));
        assert_eq!(app.rate_limit, Some(100));
        assert_eq!(app.metadata["tier"], "gold");
    }

    proptest! {
        #[test]
        fn prop_application_patch_round_trips(
            name in option::of("[a-zA-Z ]{0,16}"),
            rate_limit in arb_nullable(any::<u16>()),
            uid in arb_nullable("[a-z0-9_-]{1,12}"),
            metadata in option::of(hash_map("[a-z]{1,6}", "[a-z0-9]{0,6}", 0..4)),
        ) {
            let patch = ApplicationPatch { name, rate_limit, uid, metadata };
            let json = serde_json::to_value(&patch).unwrap();
            if patch.uid.is_absent() {
                prop_assert!(json.get("uid").is_none());
            }
            let back: ApplicationPatch = serde_json::from_value(json).unwrap();
            prop_assert_eq!(back, patch);
        }
    }
}
