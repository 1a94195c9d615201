//! Request and response payloads.
//!
//! Plain records mirroring the service's JSON schema. Required fields are
//! plain types and must be present when decoding; optional fields are
//! [`Option`]s that are left out when unset. Patch payloads use [`Nullable`]
//! for fields that distinguish "unchanged" from "cleared".

mod application;
mod authentication;
mod common;
mod endpoint;
mod event_type;
mod integration;
mod message;
mod message_attempt;
mod nullable;
mod operational_webhook;
mod statistics;

pub use application::{ApplicationIn, ApplicationOut, ApplicationPatch};
pub use authentication::{
    AppPortalAccessIn, AppPortalAccessOut, ApplicationTokenExpireIn, DashboardAccessOut,
};
pub use common::{
    BackgroundTaskOut, BackgroundTaskStatus, BackgroundTaskType, HttpErrorOut,
    HttpValidationError, ListResponse, Ordering, ValidationErrorItem,
};
pub use endpoint::{
    EndpointHeadersIn, EndpointHeadersOut, EndpointIn, EndpointOut, EndpointPatch,
    EndpointSecretOut, EndpointSecretRotateIn, EndpointUpdate, EventExampleIn, RecoverIn,
    ReplayIn,
};
pub use event_type::{EventTypeIn, EventTypeOut, EventTypePatch, EventTypeUpdate, Schemas};
pub use integration::{IntegrationIn, IntegrationKeyOut, IntegrationOut, IntegrationUpdate};
pub use message::{MessageIn, MessageOut};
pub use message_attempt::{
    EndpointMessageOut, MessageAttemptOut, MessageAttemptTriggerType, MessageEndpointOut,
    MessageStatus, StatusCodeClass,
};
pub use nullable::Nullable;
pub use operational_webhook::{
    OperationalWebhookEndpointIn, OperationalWebhookEndpointOut, OperationalWebhookEndpointSecretIn,
    OperationalWebhookEndpointSecretOut, OperationalWebhookEndpointUpdate,
};
pub use statistics::{AppUsageStatsIn, AppUsageStatsOut};
