//! # API Shared
//!
//! Shared utilities and definitions for the cats API binaries.
//!
//! Contains:
//! - Response types that are not part of the cat domain (`HealthRes`)
//! - Shared services like `HealthService`

pub mod health;

pub use health::{HealthRes, HealthService};
