//! Salesforce REST API client.
//!
//! Wraps a `TokenManager` and provides typed methods for the query,
//! composite, and platform-event endpoints. All requests share one
//! execution policy: resolve the current token and instance URL, attach
//! the bearer header, send with a fixed timeout, and map failures to
//! typed errors. No retries are performed; a single failed attempt is
//! surfaced to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use conduit_sf_auth::TokenManager;

use crate::composite::{CompositeRequest, CompositeResponse};
use crate::error::{Error, ErrorKind, Result};
use crate::events::PublishEventResult;
use crate::query::QueryResult;
use crate::{DEFAULT_API_VERSION, TRANSPORT_FAILURE_STATUS};

/// Fixed timeout applied to every request; no per-call override.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Salesforce REST API client.
///
/// Stateless aside from the shared token manager: the token is consumed
/// lazily per request, so an expired token is refreshed transparently
/// before the call goes out.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use conduit_sf_auth::{ClientCredentials, TokenManager};
/// use conduit_sf_rest::SalesforceRestClient;
///
/// let auth = Arc::new(TokenManager::new(ClientCredentials::from_env()?)?);
/// let client = SalesforceRestClient::new(auth)?;
///
/// let accounts: Vec<serde_json::Value> = client
///     .query("SELECT Id, Name FROM Account LIMIT 3")
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceRestClient {
    auth: Arc<TokenManager>,
    http: reqwest::Client,
    api_version: String,
}

impl SalesforceRestClient {
    /// Create a REST client that authenticates through the given token
    /// manager, using the default API version.
    pub fn new(auth: Arc<TokenManager>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                let message = e.to_string();
                Error::with_source(
                    ErrorKind::Api {
                        status: TRANSPORT_FAILURE_STATUS,
                        message,
                    },
                    e,
                )
            })?;

        Ok(Self {
            auth,
            http,
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g. "v64.0"). Fixed per client instance.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the REST API path for an endpoint.
    ///
    /// Example: `rest_path("query")` -> `/services/data/v64.0/query`
    fn rest_path(&self, endpoint: &str) -> String {
        format!(
            "/services/data/{}/{}",
            self.api_version,
            endpoint.trim_start_matches('/')
        )
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Execute a SOQL query and return the unwrapped record list.
    ///
    /// Only the first response page is returned; an envelope without a
    /// `records` field yields an empty vec.
    #[instrument(skip(self))]
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        let path = format!("{}?q={}", self.rest_path("query"), urlencoding::encode(soql));
        let result: QueryResult<T> = self
            .send::<(), _>(Method::GET, &path, None, HeaderMap::new())
            .await?;
        Ok(result.records)
    }

    /// Execute a composite request with multiple sub-requests.
    ///
    /// Sub-requests are sent in caller order, verbatim. The full decoded
    /// response is returned so the caller can inspect per-sub-request
    /// results.
    #[instrument(skip(self, request))]
    pub async fn composite(&self, request: &CompositeRequest) -> Result<CompositeResponse> {
        self.send(
            Method::POST,
            &self.rest_path("composite"),
            Some(request),
            HeaderMap::new(),
        )
        .await
    }

    /// Execute a SOQL query through the composite query endpoint and return
    /// the full decoded body.
    #[instrument(skip(self))]
    pub async fn composite_query(&self, soql: &str) -> Result<serde_json::Value> {
        let path = format!(
            "{}?q={}",
            self.rest_path("composite/query"),
            urlencoding::encode(soql)
        );
        self.send::<(), _>(Method::GET, &path, None, HeaderMap::new())
            .await
    }

    /// Publish a platform event to the given event sObject.
    ///
    /// Success means the platform accepted the event, not that any
    /// subscriber has received it.
    #[instrument(skip(self, payload))]
    pub async fn publish_event<B: Serialize>(
        &self,
        event_api_name: &str,
        payload: &B,
    ) -> Result<PublishEventResult> {
        let path = self.rest_path(&format!("sobjects/{event_api_name}"));
        self.send(Method::POST, &path, Some(payload), HeaderMap::new())
            .await
    }

    // =========================================================================
    // Request execution
    // =========================================================================

    /// Send an authenticated request against the instance URL and decode the
    /// JSON response.
    ///
    /// Caller-supplied headers are merged last, so they override generated
    /// ones (including `Authorization`). Non-2xx responses become an API
    /// error carrying the real status code and body text; transport-level
    /// failures carry the `-1` sentinel status and the error's description.
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<T> {
        let token = self.auth.access_token().await?;
        let base = self.auth.instance_url().await?;
        let url = format!("{base}{path}");

        let mut request = self.http.request(method, &url).bearer_auth(&token);
        if let Some(body) = body {
            request = request.json(body);
        }
        request = request.headers(headers);

        let response = request.send().await.map_err(|e| {
            let message = e.to_string();
            Error::with_source(
                ErrorKind::Api {
                    status: TRANSPORT_FAILURE_STATUS,
                    message,
                },
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::new(ErrorKind::Api {
                status: i32::from(status.as_u16()),
                message: text,
            }));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::with_source(ErrorKind::Json(e.to_string()), e))
    }
}
