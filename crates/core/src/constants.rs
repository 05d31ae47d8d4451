//! Constants used throughout the cats core crate.

/// Environment variable naming the REST listen address.
pub const REST_ADDR_ENV: &str = "CATS_REST_ADDR";

/// Listen address used when [`REST_ADDR_ENV`] is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
