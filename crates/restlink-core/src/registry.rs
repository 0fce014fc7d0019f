//! Registry of REST client implementations
//!
//! Implementations register a factory under a name during application
//! startup; the framework later builds clients by name. The registry is an
//! ordinary value owned by the composition root, so registration order is the
//! order of the calls that fill it.

use std::collections::HashMap;
use std::fmt;

use crate::client::BoxedRestClient;
use crate::error::{RestError, Result};
use crate::options::RestOptions;

/// Name the default REST client implementation registers under
pub const DEFAULT_REST_CLIENT: &str = "reqwest";

/// Builds a client from options
pub type RestClientFactory = Box<dyn Fn(&RestOptions) -> Result<BoxedRestClient> + Send + Sync>;

/// Name → factory table for REST client implementations
#[derive(Default)]
pub struct RestClientRegistry {
    factories: HashMap<String, RestClientFactory>,
}

impl RestClientRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`, replacing any earlier one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&RestOptions) -> Result<BoxedRestClient> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            tracing::debug!(name = %name, "replaced REST client factory");
        } else {
            tracing::debug!(name = %name, "registered REST client factory");
        }
        self
    }

    /// Remove a factory, returning whether one was registered
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.remove(name).is_some()
    }

    /// Check if a factory is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// List all registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build a client with the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RestError::UnknownClient`] when nothing is registered under `name`,
    /// otherwise whatever the factory returns.
    pub fn create(&self, name: &str, options: &RestOptions) -> Result<BoxedRestClient> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RestError::UnknownClient(name.to_string()))?;
        factory(options)
    }

    /// Build a client with the default implementation.
    pub fn create_default(&self, options: &RestOptions) -> Result<BoxedRestClient> {
        self.create(DEFAULT_REST_CLIENT, options)
    }

    /// Get count of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for RestClientRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClientRegistry")
            .field("names", &self.names())
            .finish()
    }
}
