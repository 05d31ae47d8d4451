use http::StatusCode;

/// Errors surfaced by the cats core.
///
/// The `Display` text of the request-level variants is the exact message returned to clients,
/// so it must stay fixed. Underlying causes are kept as sources for logging only.
#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error("Invalid JSON input")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Cat not found")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CatError {
    /// HTTP status a handler answers with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            CatError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            CatError::NotFound(_) => StatusCode::NOT_FOUND,
            CatError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

pub type CatResult<T> = std::result::Result<T, CatError>;
