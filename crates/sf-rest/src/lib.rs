//! # conduit-sf-rest
//!
//! Salesforce REST API client with SOQL Query, Composite API, and Platform
//! Event support, authenticated through `conduit-sf-auth`'s token manager.
//!
//! ## Features
//!
//! - **SOQL Query** - Execute queries and unwrap the record list
//! - **Composite API** - Execute multiple sub-requests in a single call
//! - **Composite Query** - SOQL through the composite query endpoint
//! - **Platform Events** - Publish events to an event sObject
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use conduit_sf_auth::{ClientCredentials, TokenManager};
//! use conduit_sf_rest::SalesforceRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), conduit_sf_rest::Error> {
//!     let auth = Arc::new(TokenManager::new(ClientCredentials::from_env()?)?);
//!     let client = SalesforceRestClient::new(auth)?;
//!
//!     // Query
//!     let accounts: Vec<serde_json::Value> = client
//!         .query("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     // Publish a platform event
//!     let result = client
//!         .publish_event("Order_Shipped__e", &serde_json::json!({"Code__c": "007"}))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod composite;
mod error;
mod events;
mod query;

// Main client
pub use client::SalesforceRestClient;

// Composite API
pub use composite::{
    CompositeRequest, CompositeResponse, CompositeSubrequest, CompositeSubresponse,
};

// Error types
pub use error::{Error, ErrorKind, Result};

// Platform Events
pub use events::{EventPublishError, PublishEventResult};

// Query types
pub use query::QueryResult;

/// Default Salesforce API version, as it appears in REST paths.
pub const DEFAULT_API_VERSION: &str = "v64.0";

/// Sentinel status code for transport-level failures (DNS, connection
/// refused, timeout) where no HTTP status exists.
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;
