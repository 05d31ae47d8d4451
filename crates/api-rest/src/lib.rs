//! # API REST
//!
//! REST API implementation for the cats service.
//!
//! Handles:
//! - HTTP endpoints with axum, delegating to `cats_core::handlers`
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Request bodies for `POST /cats` are taken as raw bytes and decoded by the core handler, so a
//! malformed body produces the service's own `400 "Invalid JSON input"` instead of an axum
//! extractor rejection.

#![warn(rust_2018_idioms)]

use api_shared::{HealthRes, HealthService};
use axum::{
    body::Bytes,
    extract::State,
    http::Uri,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use cats_core::{handlers, Cat, CatStore, HandlerResponse, NewCat};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared by every request handler.
#[derive(Clone)]
struct AppState {
    store: CatStore,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_cats, create_cat, get_cat, delete_cat),
    components(schemas(HealthRes, Cat, NewCat))
)]
pub struct ApiDoc;

/// Builds the full application router over `store`.
///
/// Routes:
/// - `GET /health`
/// - `GET /cats`, `POST /cats`
/// - `GET /cats/:cat_id`, `DELETE /cats/:cat_id`
/// - `/swagger-ui` and `/api-docs/openapi.json`
pub fn router(store: CatStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cats", get(list_cats).post(create_cat))
        .route("/cats/:cat_id", get(get_cat).delete(delete_cat))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

fn into_response(res: HandlerResponse) -> Response {
    (res.status, Json(res.payload)).into_response()
}

/// The `cat_id` segment of `/cats/:cat_id`, percent-decoded.
///
/// Read from the URI rather than through `Path` so that bytes which are not UTF-8 are replaced
/// instead of rejected; such an id cannot be a stored key and ends up as "Cat not found".
fn cat_id_from_uri(uri: &Uri) -> String {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/cats",
    responses(
        (status = 200, description = "Identifiers of every stored cat, unordered", body = [String])
    )
)]
#[axum::debug_handler]
async fn list_cats(State(state): State<AppState>) -> Response {
    into_response(handlers::list_cats(&state.store))
}

#[utoipa::path(
    post,
    path = "/cats",
    request_body = NewCat,
    responses(
        (status = 201, description = "Cat created; body is the new identifier", body = String),
        (status = 400, description = "Invalid JSON input", body = String)
    )
)]
/// Create a cat
///
/// Any `id` in the body is ignored; the server assigns a fresh identifier.
#[axum::debug_handler]
async fn create_cat(State(state): State<AppState>, body: Bytes) -> Response {
    into_response(handlers::create_cat(&state.store, &body))
}

#[utoipa::path(
    get,
    path = "/cats/{cat_id}",
    params(
        ("cat_id" = String, Path, description = "Cat identifier")
    ),
    responses(
        (status = 200, description = "Cat record", body = Cat),
        (status = 404, description = "Cat not found", body = String)
    )
)]
#[axum::debug_handler]
async fn get_cat(State(state): State<AppState>, uri: Uri) -> Response {
    into_response(handlers::get_cat(&state.store, &cat_id_from_uri(&uri)))
}

#[utoipa::path(
    delete,
    path = "/cats/{cat_id}",
    params(
        ("cat_id" = String, Path, description = "Cat identifier")
    ),
    responses(
        (status = 200, description = "Removed cat record", body = Cat),
        (status = 404, description = "Cat not found", body = String)
    )
)]
#[axum::debug_handler]
async fn delete_cat(State(state): State<AppState>, uri: Uri) -> Response {
    into_response(handlers::delete_cat(&state.store, &cat_id_from_uri(&uri)))
}
