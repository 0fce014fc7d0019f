//! reqwest-backed REST transport for restlink
//!
//! Provides [`ReqwestRestClient`], the default implementation of
//! [`restlink_core::RestClient`], and the functions that register it in a
//! [`restlink_core::RestClientRegistry`].
//!
//! # Architecture
//!
//! - **HTTP client**: one reqwest client per set of options, with a connect
//!   timeout and a request timeout
//! - **URL assembly**: `location` + `path`, path parameter substitution and
//!   query string encoding
//! - **Registration**: explicit, under [`restlink_core::DEFAULT_REST_CLIENT`]
//! - **Blocking facade**: [`blocking::BlockingRestClient`] behind the
//!   `blocking` feature
//!
//! # Usage
//!
//! ```no_run
//! use restlink_core::{RestClientExt, RestOptions, RestRequest};
//! use std::collections::HashMap;
//!
//! # async fn example() -> restlink_core::Result<()> {
//! let registry = restlink_transport::default_registry();
//! let client = registry.create_default(&RestOptions::default())?;
//!
//! let request = RestRequest::new("GET", "127.0.0.1:8080", "/users/{id}")
//!     .with_path_param("id", "42")
//!     .produces("application/json");
//!
//! let mut user: HashMap<String, serde_json::Value> = HashMap::new();
//! client.execute_into(&request, &mut user).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod http;
pub mod registration;

// Re-export commonly used types
#[cfg(feature = "blocking")]
pub use blocking::BlockingRestClient;
pub use http::ReqwestRestClient;
pub use registration::{default_registry, register};
