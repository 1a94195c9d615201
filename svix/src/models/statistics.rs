//! Usage statistics payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BackgroundTaskStatus, BackgroundTaskType};

/// Time window and applications to aggregate usage for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsageStatsIn {
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
    /// Application IDs or UIDs; every application when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_ids: Option<Vec<String>>,
}

/// Handle for the background task aggregating application usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsageStatsOut {
    pub id: String,
    pub status: BackgroundTaskStatus,
    pub task: BackgroundTaskType,
    /// Requested IDs or UIDs that matched no application.
    pub unresolved_app_ids: Vec<String>,
}
