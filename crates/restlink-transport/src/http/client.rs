//! reqwest-backed REST client
//!
//! Implements the [`RestClient`] trait on top of one reqwest client. The
//! client is configured once from [`RestOptions`]: connection establishment
//! is bounded by the connect timeout and every exchange by the request
//! timeout. Calls are never retried, and system proxy settings are ignored:
//! requests always go straight to `location`.

use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use restlink_core::media::APPLICATION_XML;
use restlink_core::{
    BoxedRestClient, RestBody, RestClient, RestError, RestOptions, RestRequest, RestResponse,
    Result, TransportErrorKind,
};
use std::collections::HashSet;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use url::Url;

use super::target::build_url;

/// REST client executing requests over HTTP with reqwest.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestRestClient {
    client: reqwest::Client,
    options: RestOptions,
}

impl ReqwestRestClient {
    /// Create a client from validated options.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a timeout is zero or the underlying
    /// HTTP client cannot be built.
    pub fn new(options: RestOptions) -> Result<Self> {
        options.validate()?;

        // Idle connections are dropped once they are as old as a whole
        // exchange may take.
        let client = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.request_timeout)
            .pool_idle_timeout(options.request_timeout)
            .no_proxy()
            .build()
            .map_err(|e| RestError::Configuration(e.to_string()))?;

        tracing::debug!(
            connect_timeout = ?options.connect_timeout,
            request_timeout = ?options.request_timeout,
            "built REST client"
        );

        Ok(Self { client, options })
    }

    /// Factory for [`RestClientRegistry`](restlink_core::RestClientRegistry)
    pub fn boxed(options: &RestOptions) -> Result<BoxedRestClient> {
        Ok(Arc::new(Self::new(*options)?))
    }

    fn build_request(&self, request: &RestRequest, url: Url) -> Result<reqwest::RequestBuilder> {
        let method = parse_method(&request.method)?;
        let headers = build_headers(request)?;

        let builder = self.client.request(method, url).headers(headers);
        let builder = match &request.body {
            RestBody::Empty => builder,
            RestBody::Bytes(bytes) => builder.body(bytes.clone()),
            RestBody::Xml(text) => builder.body(text.clone()),
            // sets Content-Type to application/json unless consumes did
            RestBody::Json(value) => builder.json(value),
        };

        Ok(builder)
    }
}

#[async_trait]
impl RestClient for ReqwestRestClient {
    async fn execute(&self, request: &RestRequest) -> Result<RestResponse> {
        request.validate()?;
        let url = build_url(request)?;
        let target = url.to_string();
        let builder = self.build_request(request, url)?;

        tracing::debug!(method = %request.method, url = %target, "sending REST request");

        let response = builder
            .send()
            .await
            .map_err(|e| classify(&target, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| classify(&target, e))?;

        tracing::debug!(
            url = %target,
            status = status.as_u16(),
            bytes = body.len(),
            "received REST response"
        );

        Ok(RestResponse::new(status, headers, body))
    }

    fn options(&self) -> &RestOptions {
        &self.options
    }
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
        .map_err(|_| RestError::InvalidRequest(format!("invalid HTTP method '{method}'")))
}

/// Content-Type and Accept first, then caller headers, which win on conflict.
///
/// Header names are case-insensitive, so two caller headers that differ only
/// in case are rejected.
fn build_headers(request: &RestRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if !request.consumes.is_empty() {
        headers.insert(CONTENT_TYPE, header_value("Content-Type", &request.consumes)?);
    } else if matches!(request.body, RestBody::Xml(_)) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML));
    }
    if !request.produces.is_empty() {
        headers.insert(ACCEPT, header_value("Accept", &request.produces)?);
    }

    let mut seen = HashSet::with_capacity(request.headers.len());
    for (name, value) in &request.headers {
        let key = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            RestError::InvalidRequest(format!("invalid header name '{name}': {e}"))
        })?;
        if !seen.insert(key.clone()) {
            return Err(RestError::InvalidRequest(format!(
                "header '{key}' is given more than once"
            )));
        }
        headers.insert(key, header_value(name, value)?);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        RestError::InvalidRequest(format!("invalid value for header '{name}': {e}"))
    })
}

#[track_caller]
fn classify(url: &str, err: reqwest::Error) -> RestError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() || is_connection_failure(&err) {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };

    tracing::debug!(url, %kind, error = %err, "REST request failed");
    RestError::transport(kind, url, err)
}

/// Refused, reset or aborted connections surface as I/O errors inside hyper
/// rather than as reqwest connect errors.
fn is_connection_failure(err: &reqwest::Error) -> bool {
    let mut cause = err.source();
    while let Some(current) = cause {
        if let Some(io_err) = current.downcast_ref::<io::Error>()
            && matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
            )
        {
            return true;
        }
        cause = current.source();
    }
    false
}
