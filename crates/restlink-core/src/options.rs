//! Construction options for REST clients

use std::time::Duration;

use crate::error::{RestError, Result};

/// Environment variable holding the connect timeout in milliseconds
pub const CONNECT_TIMEOUT_ENV: &str = "RESTLINK_CONNECT_TIMEOUT_MS";

/// Environment variable holding the request timeout in milliseconds
pub const REQUEST_TIMEOUT_ENV: &str = "RESTLINK_REQUEST_TIMEOUT_MS";

/// Timeouts a REST client is built with.
///
/// Both durations must be non-zero; [`RestOptions::validate`] is called by
/// client constructors so bad values fail before any request is made.
///
/// # Examples
///
/// ```rust
/// use restlink_core::RestOptions;
/// use std::time::Duration;
///
/// let options = RestOptions::default()
///     .with_connect_timeout(Duration::from_millis(500))
///     .with_request_timeout(Duration::from_secs(5));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestOptions {
    /// Maximum time to establish a connection
    pub connect_timeout: Duration,

    /// Maximum time for the request/response exchange
    pub request_timeout: Duration,
}

impl Default for RestOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(3),
        }
    }
}

impl RestOptions {
    /// Create options with explicit timeouts.
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that both timeouts are positive.
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout.is_zero() {
            return Err(RestError::Configuration(
                "connect timeout must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(RestError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Load options from environment variables, falling back to defaults.
    ///
    /// This will look for:
    /// - `RESTLINK_CONNECT_TIMEOUT_MS` for the connect timeout
    /// - `RESTLINK_REQUEST_TIMEOUT_MS` for the request timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but is not a
    /// positive whole number of milliseconds.
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();

        if let Some(timeout) = read_millis(CONNECT_TIMEOUT_ENV)? {
            options.connect_timeout = timeout;
        }
        if let Some(timeout) = read_millis(REQUEST_TIMEOUT_ENV)? {
            options.request_timeout = timeout;
        }

        options.validate()?;
        Ok(options)
    }
}

fn read_millis(name: &str) -> Result<Option<Duration>> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };

    let millis = raw.trim().parse::<u64>().map_err(|_| {
        RestError::Configuration(format!(
            "{name} must be a valid number of milliseconds, got: '{raw}'"
        ))
    })?;

    Ok(Some(Duration::from_millis(millis)))
}
