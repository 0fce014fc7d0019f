//! Error types for REST client operations
//!
//! One enum covers the whole contract between the framework and a REST
//! transport. Transport failures keep their cause and the adapter call site
//! so they can be logged; they are not meant for programmatic branching
//! beyond [`RestError::is_timeout`] and [`RestError::is_connect`].

use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Result type for REST client operations
pub type Result<T> = std::result::Result<T, RestError>;

/// Boxed error used as the source of transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What went wrong below the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS resolution, refused or reset connection, connect timeout
    Connect,
    /// The exchange did not finish before the request deadline
    Timeout,
    /// Anything else: malformed response, body read failure, ...
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connection failed"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Other => write!(f, "transport error"),
        }
    }
}

/// Errors returned by REST clients and the client registry
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RestError {
    /// Client options are invalid or the HTTP client could not be built
    #[error("Invalid REST client configuration: {0}")]
    Configuration(String),

    /// The request descriptor cannot be turned into an HTTP request
    #[error("Invalid REST request: {0}")]
    InvalidRequest(String),

    /// No factory is registered under the requested name
    #[error("No REST client registered under '{0}'")]
    UnknownClient(String),

    /// The HTTP exchange failed before a response was received
    #[error("{kind} for {url} (at {location}): {source}")]
    Transport {
        /// Failure category
        kind: TransportErrorKind,
        /// Target URL of the failed call
        url: String,
        /// Adapter call site that classified the failure
        location: &'static Location<'static>,
        /// Underlying cause
        #[source]
        source: BoxError,
    },

    /// The server answered with a failure status
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Status line and response body
        message: String,
    },

    /// A JSON response body could not be decoded into the result sink
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An XML response body could not be decoded into the result sink
    #[error("Failed to decode XML response body: {0}")]
    XmlDecode(#[from] quick_xml::DeError),
}

impl RestError {
    /// Wrap a transport failure, recording the caller's location.
    #[track_caller]
    pub fn transport(
        kind: TransportErrorKind,
        url: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            kind,
            url: url.into(),
            location: Location::caller(),
            source: source.into(),
        }
    }

    /// Build a status error from a completed response.
    ///
    /// The message is the status line followed by the body text, e.g.
    /// `404 Not Found: no such user`.
    pub fn from_response(status: http::StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        let message = if text.is_empty() {
            line
        } else {
            format!("{line}: {text}")
        };

        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// True when the request deadline or the connect deadline expired.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// True when no connection could be established.
    pub fn is_connect(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportErrorKind::Connect,
                ..
            }
        )
    }

    /// True when a successful response body did not match the result type.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::XmlDecode(_))
    }

    /// HTTP status code, for errors produced from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
