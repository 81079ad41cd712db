use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a core operation can reject a request with.
///
/// All errors are produced at the operation boundary and carried back to the
/// HTTP layer as values; nothing here panics or retries.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A required field is missing or empty.
    #[error("required field is missing: {0}")]
    Validation(&'static str),

    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with existing state: a duplicate derived task
    /// id, or a delete blocked by dependents.
    #[error("{0}")]
    Conflict(String),

    /// A malformed or unrecognized query parameter.
    #[error("invalid {0} parameter")]
    BadRequest(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
