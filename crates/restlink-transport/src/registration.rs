//! Registration of the reqwest client in a [`RestClientRegistry`]

use restlink_core::{DEFAULT_REST_CLIENT, RestClientRegistry};

use crate::http::ReqwestRestClient;

/// Register [`ReqwestRestClient`] as the default REST client.
///
/// Call this from the application's startup code, before any client is
/// created by name.
pub fn register(registry: &mut RestClientRegistry) -> &mut RestClientRegistry {
    registry.register(DEFAULT_REST_CLIENT, ReqwestRestClient::boxed)
}

/// A registry holding only the default REST client.
pub fn default_registry() -> RestClientRegistry {
    let mut registry = RestClientRegistry::new();
    register(&mut registry);
    registry
}
