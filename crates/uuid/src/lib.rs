//! Cat identifier generation.
//!
//! Every cat record is keyed by a server-generated identifier. Clients never choose it.
//!
//! Identifiers are random (version 4) UUIDs rendered in their *canonical* textual form:
//! **36 characters, lowercase hexadecimal, hyphenated 8-4-4-4-12**.
//!
//! ## Canonical form
//! - Length: 36
//! - Hyphens at byte offsets 8, 13, 18 and 23
//! - All other characters: `0-9` and `a-f`
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! This is the value produced by `Uuid::new_v4().hyphenated().to_string()`. Uppercase, braced,
//! URN and simple (no hyphen) forms are rejected by [`CatId::parse`].

mod service;

pub use service::CatId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
