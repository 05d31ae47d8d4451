//! The cat record and its creation payload.

use cats_uuid::CatId;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A stored cat.
///
/// `id` is always server-assigned and equals the record's key in the [`CatStore`].
///
/// [`CatStore`]: crate::CatStore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Free-form date text; never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// Body of a create request.
///
/// Has no `id` field: an `id` sent by the client is skipped while decoding and never reaches
/// the stored record.
///
/// Decoding is lenient in the same places a typical JSON object decoder is:
/// - keys match field names ignoring ASCII case (`Name`, `BIRTHDATE`)
/// - a repeated key keeps its last value
/// - a `null` value leaves the field as it was
/// - unknown keys are skipped
///
/// The body itself must be a JSON object, and every known field a string or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl NewCat {
    /// Decode a create payload from raw request bytes.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        if key.eq_ignore_ascii_case("name") {
            Some(&mut self.name)
        } else if key.eq_ignore_ascii_case("color") {
            Some(&mut self.color)
        } else if key.eq_ignore_ascii_case("birthDate") {
            Some(&mut self.birth_date)
        } else {
            None
        }
    }
}

impl<'de> Deserialize<'de> for NewCat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NewCatVisitor)
    }
}

struct NewCatVisitor;

impl<'de> Visitor<'de> for NewCatVisitor {
    type Value = NewCat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object describing a cat")
    }

    fn visit_map<A>(self, mut map: A) -> Result<NewCat, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut new = NewCat::default();
        while let Some(key) = map.next_key::<String>()? {
            match new.slot(&key) {
                Some(slot) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = Some(value);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(new)
    }
}

impl Cat {
    /// Build a record from a decoded payload under a freshly assigned identifier.
    ///
    /// A missing or null `name` becomes the empty string.
    pub fn from_new(id: CatId, new: NewCat) -> Self {
        Self {
            id: id.to_string(),
            name: new.name.unwrap_or_default(),
            color: new.color,
            birth_date: new.birth_date,
        }
    }
}
