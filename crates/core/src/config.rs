//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the server. Request
//! handling never reads environment variables.

use crate::constants::DEFAULT_REST_ADDR;
use crate::{CatError, CatResult};
use std::net::SocketAddr;

/// Server configuration resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    rest_addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(rest_addr: SocketAddr) -> Self {
        Self { rest_addr }
    }

    /// Build a config from the raw value of the listen-address environment variable.
    ///
    /// # Errors
    /// Returns [`CatError::InvalidInput`] if the value is set but is not a socket address.
    pub fn from_env_value(rest_addr: Option<String>) -> CatResult<Self> {
        rest_addr_from_env_value(rest_addr).map(Self::new)
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }
}

/// Parse the REST listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> CatResult<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());

    value.parse::<SocketAddr>().map_err(|e| {
        CatError::InvalidInput(format!("REST address '{}' is not valid: {}", value, e))
    })
}
