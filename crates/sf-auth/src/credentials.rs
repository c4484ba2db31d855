//! Connected-app credentials for the client-credentials flow.
//!
//! Credentials are validated at construction and immutable afterwards.
//! The secret is redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

/// Credentials for a Salesforce connected app using the OAuth 2.0
/// Client-Credentials flow.
///
/// The `client_secret` is redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    domain: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("domain", &self.domain)
            .finish()
    }
}

impl ClientCredentials {
    /// Create credentials from explicit values.
    ///
    /// Fails fast with a configuration error if any value is empty.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<Self> {
        let creds = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            domain: domain.into().trim_end_matches('/').to_string(),
        };

        if creds.client_id.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "client_id must not be empty".to_string(),
            )));
        }
        if creds.client_secret.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "client_secret must not be empty".to_string(),
            )));
        }
        if creds.domain.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "domain must not be empty".to_string(),
            )));
        }

        Ok(creds)
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `SF_CLIENT_ID` or `SALESFORCE_CLIENT_ID`
    /// - `SF_CLIENT_SECRET` or `SALESFORCE_CLIENT_SECRET`
    /// - `SF_DOMAIN` or `SALESFORCE_DOMAIN` (e.g. "myorg.my.salesforce.com")
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("SF_CLIENT_ID")
            .or_else(|_| std::env::var("SALESFORCE_CLIENT_ID"))
            .map_err(|_| Error::new(ErrorKind::EnvVar("SF_CLIENT_ID".to_string())))?;

        let client_secret = std::env::var("SF_CLIENT_SECRET")
            .or_else(|_| std::env::var("SALESFORCE_CLIENT_SECRET"))
            .map_err(|_| Error::new(ErrorKind::EnvVar("SF_CLIENT_SECRET".to_string())))?;

        let domain = std::env::var("SF_DOMAIN")
            .or_else(|_| std::env::var("SALESFORCE_DOMAIN"))
            .map_err(|_| Error::new(ErrorKind::EnvVar("SF_DOMAIN".to_string())))?;

        Self::new(client_id, client_secret, domain)
    }

    /// Get the client (consumer) ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the client secret (for internal use by the token manager).
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Get the authentication domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The token endpoint URL for this domain.
    ///
    /// A domain that already carries a scheme is used verbatim; otherwise
    /// `https://` is assumed.
    pub fn token_url(&self) -> String {
        if self.domain.starts_with("http://") || self.domain.starts_with("https://") {
            format!("{}/services/oauth2/token", self.domain)
        } else {
            format!("https://{}/services/oauth2/token", self.domain)
        }
    }
}
