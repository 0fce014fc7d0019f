//! RestClient trait - the framework's view of a REST transport

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::Result;
use crate::options::RestOptions;
use crate::request::RestRequest;
use crate::response::RestResponse;

/// A transport able to execute [`RestRequest`]s.
///
/// Implementations hold only connection configuration, so one instance can
/// serve any number of concurrent calls.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Execute one request and return the completed response.
    ///
    /// Failure statuses are returned as a response, not as an error; use
    /// [`RestClientExt::execute_into`] for the full contract.
    async fn execute(&self, request: &RestRequest) -> Result<RestResponse>;

    /// Options the client was built with
    fn options(&self) -> &RestOptions;
}

/// Shared, type-erased REST client
pub type BoxedRestClient = Arc<dyn RestClient>;

/// Calls that decode into a caller-owned result.
#[async_trait]
pub trait RestClientExt: RestClient {
    /// Execute `request` and decode a successful body into `sink`.
    ///
    /// A status of 400 or above becomes [`RestError::Status`] carrying the
    /// status line and body text.
    ///
    /// [`RestError::Status`]: crate::RestError::Status
    async fn execute_into<T>(&self, request: &RestRequest, sink: &mut T) -> Result<()>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.execute(request).await?.error_for_status()?;
        response.decode_into(sink)
    }
}

impl<C: RestClient + ?Sized> RestClientExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RestError;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, StatusCode, header};
    use serde::Deserialize;

    struct CannedClient {
        options: RestOptions,
        status: StatusCode,
        body: &'static str,
    }

    #[async_trait]
    impl RestClient for CannedClient {
        async fn execute(&self, _request: &RestRequest) -> Result<RestResponse> {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            Ok(RestResponse::new(
                self.status,
                headers,
                Bytes::from_static(self.body.as_bytes()),
            ))
        }

        fn options(&self) -> &RestOptions {
            &self.options
        }
    }

    #[derive(Debug, Default, Deserialize)]
    struct User {
        id: u64,
    }

    #[tokio::test]
    async fn test_execute_into_through_trait_object() {
        let client: BoxedRestClient = Arc::new(CannedClient {
            options: RestOptions::default(),
            status: StatusCode::OK,
            body: r#"{"id":42}"#,
        });

        let mut user = User::default();
        client
            .execute_into(&RestRequest::new("GET", "h", "/u"), &mut user)
            .await
            .unwrap();
        assert_eq!(user.id, 42);
    }

    #[tokio::test]
    async fn test_execute_into_maps_failure_status() {
        let client = CannedClient {
            options: RestOptions::default(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"error":"db down"}"#,
        };

        let mut user = User { id: 9 };
        let err = client
            .execute_into(&RestRequest::new("GET", "h", "/u"), &mut user)
            .await
            .unwrap_err();

        assert!(matches!(err, RestError::Status { status: 500, .. }));
        assert!(err.to_string().contains("db down"));
        assert_eq!(user.id, 9);
    }
}
