//! Error types for conduit-sf-rest.

/// Result type alias for conduit-sf-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for conduit-sf-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is an authentication error (the token manager
    /// could not produce a usable token).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Auth(_))
    }

    /// Returns the HTTP status code for API errors, including the `-1`
    /// sentinel for transport-level failures.
    pub fn status(&self) -> Option<i32> {
        match self.kind {
            ErrorKind::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-2xx HTTP response or transport-level failure.
    ///
    /// `status` is the real HTTP status for rejected responses, or `-1`
    /// when the request never produced a response (DNS, connection refused,
    /// timeout); `message` is the response body text or the transport
    /// error's description.
    #[error("API error: {status} {message}")]
    Api { status: i32, message: String },

    /// Authentication failure from the token manager, unchanged in kind.
    #[error("Authentication error: {0}")]
    Auth(conduit_sf_auth::Error),

    /// JSON decode error on a successful response.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<conduit_sf_auth::Error> for Error {
    fn from(err: conduit_sf_auth::Error) -> Self {
        Error::new(ErrorKind::Auth(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
