//! Outbound REST request descriptor

use bytes::Bytes;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{RestError, Result};
use crate::media;

/// Payload attached to a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RestBody {
    /// No body
    #[default]
    Empty,

    /// Raw bytes, sent as-is
    Bytes(Bytes),

    /// JSON value, serialized when the request is sent
    Json(serde_json::Value),

    /// Serialized XML document
    Xml(String),
}

impl RestBody {
    /// Check if there is no payload
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Description of one REST call.
///
/// The descriptor is read-only to the client executing it, so one value can
/// be sent several times or shared between tasks.
///
/// # Examples
///
/// ```rust
/// use restlink_core::RestRequest;
///
/// let request = RestRequest::new("GET", "127.0.0.1:8080", "/users/{id}")
///     .with_path_param("id", "42")
///     .with_query_param("verbose", "true")
///     .produces("application/json");
///
/// assert_eq!(request.path_params["id"], "42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// Target `host[:port]`, optionally followed by a base path
    pub location: String,

    /// Request path, may contain `{name}` placeholders
    pub path: String,

    /// Values for `{name}` placeholders in the path
    pub path_params: HashMap<String, String>,

    /// Query parameters, encoded in key order
    pub query_params: BTreeMap<String, String>,

    /// Extra request headers
    pub headers: HashMap<String, String>,

    /// Content type of the request body
    pub consumes: String,

    /// Accepted content type of the response
    pub produces: String,

    /// Request payload
    pub body: RestBody,
}

impl RestRequest {
    /// Create a new request descriptor
    pub fn new(
        method: impl Into<String>,
        location: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            location: location.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add a path parameter
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Add a header to the request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request content type
    pub fn consumes(mut self, content_type: impl Into<String>) -> Self {
        self.consumes = content_type.into();
        self
    }

    /// Set the accepted response content type
    pub fn produces(mut self, content_type: impl Into<String>) -> Self {
        self.produces = content_type.into();
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RestBody::Bytes(body.into());
        self
    }

    /// Set the request body from string
    pub fn with_text_body(mut self, text: impl Into<String>) -> Self {
        self.body = RestBody::Bytes(Bytes::from(text.into()));
        self
    }

    /// Set a JSON body from any serializable value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON
    pub fn with_json_body<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| {
            RestError::InvalidRequest(format!("request body is not serializable: {e}"))
        })?;
        self.body = RestBody::Json(value);
        Ok(self)
    }

    /// Set an XML body from any serializable value
    ///
    /// The root element is named after the value's type. Without an explicit
    /// [`consumes`](Self::consumes) the body is sent as `application/xml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as XML
    pub fn with_xml_body<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let document = quick_xml::se::to_string(value).map_err(|e| {
            RestError::InvalidRequest(format!("request body is not serializable as XML: {e}"))
        })?;
        self.body = RestBody::Xml(document);
        Ok(self)
    }

    /// Set a body encoded according to [`consumes`](Self::consumes)
    ///
    /// XML content types (`application/xml`, `text/xml`, `*+xml`) produce an
    /// XML body, anything else JSON. Set `consumes` before calling this.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded
    pub fn with_typed_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        if media::is_xml(&self.consumes) {
            self.with_xml_body(value)
        } else {
            self.with_json_body(value)
        }
    }

    /// Check the fields every request needs.
    pub fn validate(&self) -> Result<()> {
        if self.method.trim().is_empty() {
            return Err(RestError::InvalidRequest("method must not be empty".to_string()));
        }
        if self.path.trim().is_empty() {
            return Err(RestError::InvalidRequest("path must not be empty".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(RestError::InvalidRequest(
                "location must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
