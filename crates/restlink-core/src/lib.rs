#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core contracts for restlink REST transports.
//!
//! This crate defines what an RPC framework needs to talk to a REST
//! transport, without depending on any HTTP library:
//!
//! - **Options** via [`RestOptions`] (connect and request timeouts)
//! - **Requests** via [`RestRequest`] (method, location, path template,
//!   parameters, headers, content types, JSON or XML body)
//! - **Clients** via the [`RestClient`] trait and [`RestClientExt`] for
//!   decoding into a caller-owned result
//! - **Discovery** via [`RestClientRegistry`], filled explicitly at startup
//! - **Errors** via [`RestError`]
//!
//! # Examples
//!
//! ```rust
//! use restlink_core::{RestClientRegistry, RestOptions, RestError};
//!
//! let registry = RestClientRegistry::new();
//! let result = registry.create_default(&RestOptions::default());
//! assert!(matches!(result, Err(RestError::UnknownClient(_))));
//! ```

pub mod client;
pub mod error;
pub mod media;
pub mod options;
pub mod registry;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use client::{BoxedRestClient, RestClient, RestClientExt};
pub use error::{BoxError, RestError, Result, TransportErrorKind};
pub use options::RestOptions;
pub use registry::{DEFAULT_REST_CLIENT, RestClientFactory, RestClientRegistry};
pub use request::{RestBody, RestRequest};
pub use response::RestResponse;
