//! Request handlers for the cat resource.
//!
//! Each handler takes the [`CatStore`] plus the parts of the request it needs and returns a
//! [`HandlerResponse`]: a status code and a payload. Callers tell success from failure by the
//! status alone; on failure the payload is a fixed human-readable message.
//!
//! | Handler        | Success                     | Failure                          |
//! |----------------|-----------------------------|----------------------------------|
//! | [`list_cats`]  | 200, all ids                | none                             |
//! | [`create_cat`] | 201, new id                 | 400 `"Invalid JSON input"`       |
//! | [`get_cat`]    | 200, record                 | 404 `"Cat not found"`            |
//! | [`delete_cat`] | 200, removed record         | 404 `"Cat not found"`            |
//!
//! Handlers never suspend; they do no I/O beyond the store.

use crate::{Cat, CatError, CatResult, CatStore, NewCat};
use cats_uuid::CatId;
use http::StatusCode;
use serde::Serialize;

/// Body of a handler response.
///
/// Serialises untagged, so on the wire it is just the inner JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Ids(Vec<String>),
    Id(String),
    Cat(Cat),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub payload: Payload,
}

impl HandlerResponse {
    pub fn new(status: StatusCode, payload: Payload) -> Self {
        Self { status, payload }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<CatError> for HandlerResponse {
    fn from(err: CatError) -> Self {
        Self::new(err.status(), Payload::Message(err.to_string()))
    }
}

/// `GET /cats`: every stored identifier, order unspecified.
pub fn list_cats(store: &CatStore) -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK, Payload::Ids(store.ids()))
}

/// `POST /cats`: decode `body`, assign a fresh identifier and store the record.
///
/// Any `id` in the body is ignored. On a decoding failure the store is not touched.
pub fn create_cat(store: &CatStore, body: &[u8]) -> HandlerResponse {
    match try_create_cat(store, body) {
        Ok(id) => HandlerResponse::new(StatusCode::CREATED, Payload::Id(id)),
        Err(e) => {
            tracing::warn!("create cat rejected: {:?}", e);
            e.into()
        }
    }
}

/// `GET /cats/{cat_id}`: the stored record.
pub fn get_cat(store: &CatStore, cat_id: &str) -> HandlerResponse {
    match store
        .get(cat_id)
        .ok_or_else(|| CatError::NotFound(cat_id.to_string()))
    {
        Ok(cat) => HandlerResponse::new(StatusCode::OK, Payload::Cat(cat)),
        Err(e) => e.into(),
    }
}

/// `DELETE /cats/{cat_id}`: remove the record and return it.
pub fn delete_cat(store: &CatStore, cat_id: &str) -> HandlerResponse {
    match store
        .remove(cat_id)
        .ok_or_else(|| CatError::NotFound(cat_id.to_string()))
    {
        Ok(cat) => {
            tracing::info!("deleted cat {}", cat.id);
            HandlerResponse::new(StatusCode::OK, Payload::Cat(cat))
        }
        Err(e) => e.into(),
    }
}

fn try_create_cat(store: &CatStore, body: &[u8]) -> CatResult<String> {
    let new = NewCat::from_slice(body).map_err(CatError::InvalidJson)?;

    // The identifier is assigned after decoding so nothing in the body can replace it.
    let cat = Cat::from_new(CatId::new(), new);
    let id = cat.id.clone();
    store.insert(cat);

    tracing::info!("created cat {}", id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cat(id: &str, name: &str) -> Cat {
        Cat {
            id: id.into(),
            name: name.into(),
            color: None,
            birth_date: None,
        }
    }

    fn expect_id(res: &HandlerResponse) -> String {
        match &res.payload {
            Payload::Id(id) => id.clone(),
            other => panic!("Expected id payload, got {:?}", other),
        }
    }

    fn expect_cat(res: &HandlerResponse) -> Cat {
        match &res.payload {
            Payload::Cat(cat) => cat.clone(),
            other => panic!("Expected cat payload, got {:?}", other),
        }
    }

    #[test]
    fn test_list_cats_empty() {
        let res = list_cats(&CatStore::new());

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.payload, Payload::Ids(vec![]));
    }

    #[test]
    fn test_list_cats_returns_store_keys() {
        let store = CatStore::from_cats([cat("id1", "Toto"), cat("id2", "Mimi")]);
        let res = list_cats(&store);

        assert_eq!(res.status, StatusCode::OK);
        let Payload::Ids(ids) = res.payload else {
            panic!("Expected ids payload");
        };
        let got: HashSet<String> = ids.into_iter().collect();
        let expected: HashSet<String> = ["id1", "id2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_create_cat_success() {
        let store = CatStore::new();
        let body = br#"{"name":"Mimi","color":"Black","birthDate":"2024-01-01"}"#;

        let res = create_cat(&store, body);
        assert_eq!(res.status, StatusCode::CREATED);

        let id = expect_id(&res);
        assert!(CatId::parse(&id).is_ok(), "returned id is not canonical: {}", id);

        let saved = store.get(&id).expect("created cat should be stored");
        assert_eq!(
            saved,
            Cat {
                id: id.clone(),
                name: "Mimi".into(),
                color: Some("Black".into()),
                birth_date: Some("2024-01-01".into()),
            }
        );
    }

    #[test]
    fn test_create_cat_bad_json() {
        let store = CatStore::from_cats([cat("keep", "Keep")]);

        let res = create_cat(&store, b"{not-json");

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.payload, Payload::Message("Invalid JSON input".into()));
        assert_eq!(store.len(), 1);
        assert!(store.get("keep").is_some());
    }

    #[test]
    fn test_create_cat_wrong_field_type_is_bad_json() {
        let store = CatStore::new();

        let res = create_cat(&store, br#"{"name":["not","a","string"]}"#);

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_cat_repeated_key_keeps_last_value() {
        let store = CatStore::new();

        let res = create_cat(&store, br#"{"name":"a","name":"b"}"#);
        assert_eq!(res.status, StatusCode::CREATED);

        let saved = store.get(&expect_id(&res)).expect("created cat should be stored");
        assert_eq!(saved.name, "b");
    }

    #[test]
    fn test_create_cat_matches_keys_ignoring_case() {
        let store = CatStore::new();

        let res = create_cat(&store, br#"{"Name":"Toto","Color":"Grey"}"#);
        assert_eq!(res.status, StatusCode::CREATED);

        let saved = store.get(&expect_id(&res)).expect("created cat should be stored");
        assert_eq!(saved.name, "Toto");
        assert_eq!(saved.color.as_deref(), Some("Grey"));
    }

    #[test]
    fn test_create_cat_null_body_is_bad_json() {
        let store = CatStore::new();

        let res = create_cat(&store, b"null");

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.payload, Payload::Message("Invalid JSON input".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_cat_ignores_provided_id() {
        let store = CatStore::new();

        let res = create_cat(&store, br#"{"id":"hacker","name":"Neo"}"#);
        assert_eq!(res.status, StatusCode::CREATED);

        let id = expect_id(&res);
        assert_ne!(id, "hacker");
        assert!(store.get("hacker").is_none());

        let saved = store.get(&id).expect("created cat should be stored");
        assert_eq!(saved.id, id);
        assert_eq!(saved.name, "Neo");
    }

    #[test]
    fn test_create_cat_ignores_id_matching_existing_record() {
        let store = CatStore::from_cats([cat("existing", "Old")]);

        let res = create_cat(&store, br#"{"id":"existing","name":"New"}"#);
        assert_eq!(res.status, StatusCode::CREATED);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("existing").map(|c| c.name), Some("Old".into()));
    }

    #[test]
    fn test_create_cat_twice_gives_distinct_ids() {
        let store = CatStore::new();

        let first = expect_id(&create_cat(&store, br#"{"name":"Toto"}"#));
        let second = expect_id(&create_cat(&store, br#"{"name":"Toto"}"#));

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_cat_found() {
        let store = CatStore::from_cats([cat("id1", "Toto")]);

        let res = get_cat(&store, "id1");

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(expect_cat(&res), cat("id1", "Toto"));
    }

    #[test]
    fn test_get_cat_not_found() {
        let res = get_cat(&CatStore::new(), "missing");

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.payload, Payload::Message("Cat not found".into()));
    }

    #[test]
    fn test_delete_cat_removes_and_returns_record() {
        let store = CatStore::from_cats([cat("id1", "Toto"), cat("id2", "Mimi")]);

        let res = delete_cat(&store, "id1");

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(expect_cat(&res), cat("id1", "Toto"));
        assert_eq!(store.len(), 1);
        assert_eq!(get_cat(&store, "id1").status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_delete_cat_not_found() {
        let store = CatStore::from_cats([cat("id1", "Toto")]);

        let res = delete_cat(&store, "missing");

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.payload, Payload::Message("Cat not found".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_full_lifecycle() {
        let store = CatStore::new();

        let created = create_cat(
            &store,
            br#"{"name":"Mimi","color":"Black","birthDate":"2024-01-01"}"#,
        );
        assert_eq!(created.status, StatusCode::CREATED);
        let id = expect_id(&created);

        assert_eq!(list_cats(&store).payload, Payload::Ids(vec![id.clone()]));

        let fetched = get_cat(&store, &id);
        assert!(fetched.is_success());
        let record = expect_cat(&fetched);
        assert_eq!(record.color.as_deref(), Some("Black"));

        let deleted = delete_cat(&store, &id);
        assert_eq!(deleted.status, StatusCode::OK);
        assert_eq!(expect_cat(&deleted), record);

        let gone = get_cat(&store, &id);
        assert_eq!(gone.status, StatusCode::NOT_FOUND);
        assert_eq!(gone.payload, Payload::Message("Cat not found".into()));
    }

    #[test]
    fn test_payload_serialises_untagged() {
        let ids = serde_json::to_string(&Payload::Ids(vec!["a".into()])).unwrap();
        let message = serde_json::to_string(&Payload::Message("Cat not found".into())).unwrap();

        assert_eq!(ids, r#"["a"]"#);
        assert_eq!(message, r#""Cat not found""#);
    }
}
