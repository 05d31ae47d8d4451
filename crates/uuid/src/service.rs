//! The [`CatId`] wrapper and its canonical-form checks.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

use ::uuid::Uuid;

const CANONICAL_LEN: usize = 36;
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// A cat identifier in canonical hyphenated form.
///
/// Once constructed the inner UUID always renders as 36 lowercase characters, so the string
/// form can be used directly as a store key.
///
/// # Construction
/// - [`CatId::new`] allocates a fresh random identifier (used by the create handler).
/// - [`CatId::parse`] validates an externally supplied identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CatId(Uuid);

impl Default for CatId {
    fn default() -> Self {
        Self::new()
    }
}

impl CatId {
    /// Generates a new random identifier.
    ///
    /// Backed by 122 random bits from the OS RNG (RFC 4122 version 4), so collisions are
    /// negligible in practice.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// This does **not** normalise other UUID spellings. A value that is a valid UUID but not
    /// canonical (for example uppercase) is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "identifier must be 36 lowercase hex characters with hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(e.to_string()))
    }

    /// Returns true if `input` is in canonical hyphenated lowercase form.
    ///
    /// Purely syntactic; cheap enough to use as a pre-check before [`CatId::parse`].
    pub fn is_canonical(input: &str) -> bool {
        input.len() == CANONICAL_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if HYPHEN_OFFSETS.contains(&i) {
                    b == b'-'
                } else {
                    matches!(b, b'0'..=b'9' | b'a'..=b'f')
                }
            })
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CatId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatId::parse(s)
    }
}
