//! # conduit-sf-auth
//!
//! Salesforce authentication via the OAuth 2.0 Client-Credentials flow,
//! with transparent token caching and refresh.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Example
//!
//! ```rust,ignore
//! use conduit_sf_auth::{ClientCredentials, TokenManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), conduit_sf_auth::Error> {
//!     // From SF_CLIENT_ID / SF_CLIENT_SECRET / SF_DOMAIN
//!     let creds = ClientCredentials::from_env()?;
//!
//!     let manager = TokenManager::new(creds)?;
//!
//!     // First access performs the credential exchange; later accesses
//!     // reuse the cached token until it nears expiry.
//!     let token = manager.access_token().await?;
//!     let instance = manager.instance_url().await?;
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod token;

pub use credentials::ClientCredentials;
pub use error::{Error, ErrorKind, Result};
pub use token::TokenManager;

/// Fraction of the provider-declared token lifetime after which a refresh
/// is triggered, so a refresh happens before Salesforce would actually
/// reject the token.
pub const TOKEN_SAFETY_MARGIN: f64 = 0.9;

/// Token lifetime assumed when the token response omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 900;
