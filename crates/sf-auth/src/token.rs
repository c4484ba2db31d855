//! Token lifecycle management for the client-credentials flow.
//!
//! `TokenManager` owns the cached token state and performs the credential
//! exchange lazily: the first accessor call triggers an exchange, and later
//! calls reuse the cached token until it nears expiry.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::credentials::ClientCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::{DEFAULT_TOKEN_LIFETIME_SECS, TOKEN_SAFETY_MARGIN};

/// Timeout applied to the credential exchange request.
const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Cached result of a credential exchange.
///
/// Replaced wholesale on every refresh; never partially written, so a failed
/// exchange leaves no stale-but-plausible state behind.
struct TokenState {
    access_token: String,
    instance_url: String,
    expires_at: Instant,
}

/// Obtains and refreshes an access token via the client-credentials flow.
///
/// Accessors refresh on demand: `access_token` when the cached token has
/// passed its safety-margin expiry, `instance_url` when nothing is cached
/// yet. Refreshes are serialized behind the state lock, so concurrent
/// callers racing past an expired check cannot issue redundant exchanges.
///
/// The access token is redacted in Debug output.
pub struct TokenManager {
    credentials: ClientCredentials,
    http: reqwest::Client,
    state: Mutex<Option<TokenState>>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("credentials", &self.credentials)
            .field("state", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a token manager for the given credentials.
    ///
    /// No network traffic happens here; the exchange is deferred until the
    /// first accessor call.
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            credentials,
            http,
            state: Mutex::new(None),
        })
    }

    /// Get the credentials this manager authenticates with.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Return a valid access token, performing a credential exchange if none
    /// is cached or the cached one has passed its safety-margin expiry.
    ///
    /// Never returns an empty token: an exchange failure propagates instead.
    pub async fn access_token(&self) -> Result<String> {
        let mut state = self.state.lock().await;
        match state.as_ref() {
            Some(cached) if Instant::now() < cached.expires_at => {
                Ok(cached.access_token.clone())
            }
            _ => {
                let fresh = self.exchange().await?;
                let token = fresh.access_token.clone();
                *state = Some(fresh);
                Ok(token)
            }
        }
    }

    /// Return the instance (base) URL, performing a credential exchange when
    /// nothing is cached yet.
    pub async fn instance_url(&self) -> Result<String> {
        let mut state = self.state.lock().await;
        match state.as_ref() {
            Some(cached) => Ok(cached.instance_url.clone()),
            None => {
                let fresh = self.exchange().await?;
                let url = fresh.instance_url.clone();
                *state = Some(fresh);
                Ok(url)
            }
        }
    }

    /// Perform the credential exchange against the token endpoint.
    ///
    /// Credential values are never logged.
    #[instrument(skip(self))]
    async fn exchange(&self) -> Result<TokenState> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
        ];
        let body = serde_urlencoded::to_string(params)
            .map_err(|e| Error::with_source(ErrorKind::TokenRequest(e.to_string()), e))?;

        let response = self
            .http
            .post(self.credentials.token_url())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::with_source(ErrorKind::TokenRequest(e.to_string()), e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::new(ErrorKind::TokenRequest(format!(
                "{} {}",
                status.as_u16(),
                text
            ))));
        }

        let payload: TokenExchangeResponse = response
            .json()
            .await
            .map_err(|e| Error::with_source(ErrorKind::Json(e.to_string()), e))?;

        let access_token = payload
            .access_token
            .ok_or_else(|| Error::new(ErrorKind::MissingField("access_token")))?;
        let instance_url = payload
            .instance_url
            .ok_or_else(|| Error::new(ErrorKind::MissingField("instance_url")))?;

        let lifetime = payload.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        let expires_at =
            Instant::now() + Duration::from_secs_f64(lifetime as f64 * TOKEN_SAFETY_MARGIN);

        debug!(
            instance_url = %instance_url,
            expires_in = lifetime,
            "obtained access token"
        );

        Ok(TokenState {
            access_token,
            instance_url: instance_url.trim_end_matches('/').to_string(),
            expires_at,
        })
    }
}

/// Wire shape of the token endpoint response.
///
/// All fields optional so missing keys surface as typed missing-field errors
/// rather than deserialization failures.
#[derive(Deserialize)]
struct TokenExchangeResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    instance_url: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}
