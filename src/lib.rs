//! # conduit-sf-api
//!
//! A thin Salesforce API client for Rust built around the OAuth 2.0
//! Client-Credentials flow.
//!
//! The token lifecycle is the only stateful piece: `TokenManager` performs
//! the credential exchange lazily, caches the token, and refreshes it
//! before expiry. Everything else is a stateless translation of method
//! calls into REST requests.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages avoid embedding credential data
//!
//! ## Crates
//!
//! - **conduit-sf-auth** - Client-credentials flow with token caching/refresh
//! - **conduit-sf-rest** - REST API: SOQL Query, Composite, Platform Events
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use conduit_sf_api::{ClientCredentials, SalesforceRestClient, TokenManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SF_CLIENT_ID / SF_CLIENT_SECRET / SF_DOMAIN
//!     let creds = ClientCredentials::from_env()?;
//!     let auth = Arc::new(TokenManager::new(creds)?);
//!     let client = SalesforceRestClient::new(auth)?;
//!
//!     let accounts: Vec<serde_json::Value> = client
//!         .query("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     for account in accounts {
//!         println!("{}", account["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export the crates for convenient access
#[cfg(feature = "auth")]
pub use conduit_sf_auth as auth;
#[cfg(feature = "rest")]
pub use conduit_sf_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use conduit_sf_auth::{ClientCredentials, TokenManager};
#[cfg(feature = "rest")]
pub use conduit_sf_rest::{
    CompositeRequest, CompositeSubrequest, PublishEventResult, SalesforceRestClient,
};
