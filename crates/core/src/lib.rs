//! # Cats Core
//!
//! Business logic for the cats service:
//! - The [`Cat`] record and its creation payload
//! - The in-memory [`CatStore`]
//! - The four request handlers in [`handlers`]
//! - Startup configuration
//!
//! **No transport concerns**: routing, HTTP servers and OpenAPI documents belong in
//! `api-rest`. Handlers here speak in status codes and payloads only.

pub mod cat;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod store;

pub use cat::{Cat, NewCat};
pub use config::ServerConfig;
pub use constants::{DEFAULT_REST_ADDR, REST_ADDR_ENV};
pub use error::{CatError, CatResult};
pub use handlers::{HandlerResponse, Payload};
pub use store::CatStore;

pub use cats_uuid::CatId;
