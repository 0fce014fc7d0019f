//! Completed REST response

use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use serde::de::DeserializeOwned;

use crate::error::{RestError, Result};
use crate::media;

/// Status, headers and body of a finished exchange.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// HTTP status code
    pub status: StatusCode,

    /// Response headers
    pub headers: HeaderMap,

    /// Response body
    pub body: Bytes,
}

impl RestResponse {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if response is an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Response content type, without parameters
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(media::essence)
    }

    /// Whether the body is declared as JSON (`application/json`, `*+json`, ...)
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(media::is_json)
    }

    /// Whether the body is declared as XML (`application/xml`, `text/xml`, `*+xml`, ...)
    pub fn is_xml(&self) -> bool {
        self.content_type().is_some_and(media::is_xml)
    }

    /// Get the response body as a string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Parse response body as XML
    pub fn xml<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(quick_xml::de::from_reader(self.body.as_ref())?)
    }

    /// Turn a failure status into an error, pass anything else through.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_error() {
            return Err(RestError::from_response(self.status, &self.body));
        }
        Ok(self)
    }

    /// Decode the body into `sink` when the exchange succeeded.
    ///
    /// JSON and XML bodies are decoded; other content types and empty bodies
    /// leave the sink untouched. Non-2xx statuses below 400 are not decoded
    /// either.
    pub fn decode_into<T: DeserializeOwned>(&self, sink: &mut T) -> Result<()> {
        if !self.is_success() || self.body.is_empty() {
            return Ok(());
        }
        if self.is_json() {
            *sink = self.json()?;
        } else if self.is_xml() {
            *sink = self.xml()?;
        } else {
            tracing::debug!(
                content_type = self.content_type().unwrap_or("<none>"),
                "response body not decoded: unsupported content type"
            );
        }
        Ok(())
    }
}
