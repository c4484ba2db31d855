//! Composite API request and response types.

use serde::{Deserialize, Serialize};

/// A composite request containing multiple sub-requests.
///
/// Sub-requests may reference earlier sub-requests' results with the
/// `@{ReferenceId.field}` syntax (e.g. `@{AccountRef.records[0].Id}`); that
/// substitution is performed server-side.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeRequest {
    #[serde(rename = "allOrNone")]
    pub all_or_none: bool,
    #[serde(rename = "collateSubrequests")]
    pub collate_subrequests: bool,
    #[serde(rename = "compositeRequest")]
    pub subrequests: Vec<CompositeSubrequest>,
}

impl CompositeRequest {
    /// Create a composite request with the default envelope flags:
    /// `allOrNone = true`, `collateSubrequests = false`.
    pub fn new(subrequests: Vec<CompositeSubrequest>) -> Self {
        Self {
            all_or_none: true,
            collate_subrequests: false,
            subrequests,
        }
    }

    /// Set whether the whole request rolls back when any sub-request fails.
    pub fn with_all_or_none(mut self, all_or_none: bool) -> Self {
        self.all_or_none = all_or_none;
        self
    }

    /// Set whether independent sub-requests may be collated for execution.
    pub fn with_collated(mut self, collate: bool) -> Self {
        self.collate_subrequests = collate;
        self
    }
}

/// A single sub-request within a composite request.
///
/// Passed through to the wire verbatim, in caller order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSubrequest {
    pub method: String,
    pub url: String,
    #[serde(rename = "referenceId")]
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl CompositeSubrequest {
    /// A GET sub-request for the given relative URL.
    pub fn get(url: impl Into<String>, reference_id: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            reference_id: reference_id.into(),
            body: None,
        }
    }

    /// A POST sub-request with a JSON body.
    pub fn post(
        url: impl Into<String>,
        reference_id: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
            reference_id: reference_id.into(),
            body: Some(body),
        }
    }
}

/// Response from a composite request.
#[derive(Debug, Clone, Deserialize)]
pub struct CompositeResponse {
    #[serde(rename = "compositeResponse")]
    pub responses: Vec<CompositeSubresponse>,
}

/// Response from a single sub-request. Callers inspect these per
/// sub-request results themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct CompositeSubresponse {
    pub body: serde_json::Value,
    #[serde(rename = "httpHeaders", default)]
    pub http_headers: serde_json::Value,
    #[serde(rename = "httpStatusCode")]
    pub http_status_code: u16,
    #[serde(rename = "referenceId")]
    pub reference_id: String,
}
