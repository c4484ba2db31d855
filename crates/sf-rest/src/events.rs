//! Platform Event publication types.

use serde::Deserialize;

/// Result of publishing a platform event.
///
/// Success means the event was accepted by the platform, not that any
/// subscriber has seen it yet; delivery is asynchronous server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishEventResult {
    /// Id of the published event message, when the platform returns one.
    #[serde(default)]
    pub id: Option<String>,
    /// Whether the event was accepted.
    #[serde(default)]
    pub success: bool,
    /// Errors reported for a rejected publish.
    #[serde(default)]
    pub errors: Vec<EventPublishError>,
}

/// Error detail for a rejected event publish.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPublishError {
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
