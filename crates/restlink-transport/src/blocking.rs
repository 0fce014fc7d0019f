//! Thread-blocking facade over the async REST client
//!
//! For framework code that runs on plain threads. Each call blocks the
//! calling thread until the exchange completes, fails or times out. Must not
//! be used (or dropped) from inside an async task.

use restlink_core::{
    BoxedRestClient, RestClient, RestClientExt, RestError, RestOptions, RestRequest, RestResponse, Result,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::http::ReqwestRestClient;

/// Blocking REST client.
///
/// Owns a small tokio runtime that drives the wrapped async client. Safe to
/// share between threads.
pub struct BlockingRestClient {
    inner: BoxedRestClient,
    runtime: tokio::runtime::Runtime,
}

impl BlockingRestClient {
    /// Create a blocking client backed by [`ReqwestRestClient`].
    pub fn new(options: RestOptions) -> Result<Self> {
        Self::from_client(Arc::new(ReqwestRestClient::new(options)?))
    }

    /// Wrap any async client.
    pub fn from_client(inner: BoxedRestClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("restlink-blocking")
            .enable_all()
            .build()
            .map_err(|e| RestError::Configuration(format!("failed to start runtime: {e}")))?;

        Ok(Self { inner, runtime })
    }

    /// Execute one request, blocking until the response arrives.
    pub fn execute(&self, request: &RestRequest) -> Result<RestResponse> {
        self.runtime.block_on(self.inner.execute(request))
    }

    /// Execute `request` and decode a successful body into `sink`.
    pub fn execute_into<T>(&self, request: &RestRequest, sink: &mut T) -> Result<()>
    where
        T: DeserializeOwned + Send,
    {
        self.runtime.block_on(self.inner.execute_into(request, sink))
    }

    /// Options the wrapped client was built with
    pub fn options(&self) -> &RestOptions {
        self.inner.options()
    }
}

impl std::fmt::Debug for BlockingRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingRestClient")
            .field("options", self.options())
            .finish()
    }
}
