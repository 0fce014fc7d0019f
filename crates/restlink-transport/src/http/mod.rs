//! HTTP transport implementation
//!
//! Provides the reqwest-backed [`ReqwestRestClient`] and the URL assembly
//! it relies on.

pub mod client;
pub mod target;

pub use client::ReqwestRestClient;
pub use target::build_url;
