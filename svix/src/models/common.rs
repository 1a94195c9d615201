//! Shapes shared by every resource.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One page of a list operation.
///
/// Pass `iterator` back as the next call's iterator until `done` is `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_iterator: Option<String>,
}

/// Sort order of a list operation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Ordering {
    #[default]
    Ascending,
    Descending,
}

/// The generic error body returned with most non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorOut {
    pub code: String,
    pub detail: String,
}

/// The error body returned with `422 Unprocessable Entity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpValidationError {
    pub detail: Vec<ValidationErrorItem>,
}

/// A single rejected field in an [`HttpValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorItem {
    /// Path to the rejected field, e.g. `["body", "name"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

/// State of a background task started by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackgroundTaskStatus {
    Running,
    Finished,
    Failed,
}

/// Kind of a background task started by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum BackgroundTaskType {
    #[serde(rename = "endpoint.replay")]
    #[strum(serialize = "endpoint.replay")]
    EndpointReplay,
    #[serde(rename = "endpoint.recover")]
    #[strum(serialize = "endpoint.recover")]
    EndpointRecover,
    #[serde(rename = "application.stats")]
    #[strum(serialize = "application.stats")]
    ApplicationStats,
    #[serde(rename = "message.broadcast")]
    #[strum(serialize = "message.broadcast")]
    MessageBroadcast,
    #[serde(rename = "sdk.generate")]
    #[strum(serialize = "sdk.generate")]
    SdkGenerate,
    #[serde(rename = "event-type.aggregate")]
    #[strum(serialize = "event-type.aggregate")]
    EventTypeAggregate,
}

/// Handle for a background task, returned by recover and replay operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTaskOut {
    pub id: String,
    pub status: BackgroundTaskStatus,
    pub task: BackgroundTaskType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_list_response_without_iterator() {
        let page: ListResponse<String> =
            serde_json::from_value(json!({ "data": ["a", "b"], "done": true })).unwrap();
        assert_eq!(page.data, vec!["a", "b"]);
        assert!(page.done);
        assert!(page.iterator.is_none());
    }

    #[test]
    fn test_list_response_requires_done() {
        let result = serde_json::from_value::<ListResponse<String>>(json!({ "data": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_wire_format() {
        assert_eq!(serde_json::to_value(Ordering::Descending).unwrap(), json!("descending"));
        assert_eq!(Ordering::Ascending.to_string(), "ascending");
    }

    #[test]
    fn test_background_task_type_rejects_unknown() {
        let ok: BackgroundTaskType = serde_json::from_value(json!("endpoint.recover")).unwrap();
        assert_eq!(ok, BackgroundTaskType::EndpointRecover);
        assert_eq!(ok.to_string(), "endpoint.recover");
        assert!(serde_json::from_value::<BackgroundTaskType>(json!("endpoint.explode")).is_err());
    }

    proptest! {
        #[test]
        fn prop_list_response_round_trips(
            data in vec("[a-z0-9_]{1,10}", 0..5),
            done in any::<bool>(),
            iterator in option::of("[A-Za-z0-9]{1,16}"),
            prev_iterator in option::of("-?[A-Za-z0-9]{1,16}"),
        ) {
            let page = ListResponse { data, done, iterator, prev_iterator };
            let json = serde_json::to_value(&page).unwrap();
            prop_assert_eq!(json["done"].as_bool(), Some(done));
            let back: ListResponse<String> = serde_json::from_value(json).unwrap();
            prop_assert_eq!(back, page);
        }
    }
}
