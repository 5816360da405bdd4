//! Maps catalog errors and request rejections onto HTTP responses.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorResponse;
use mergington::errors::{ActivityError, ErrorKind};

/// Everything a handler can fail with. Every variant renders as a JSON
/// `{"detail": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    Activity(ActivityError),
    /// The query string could not be decoded into the expected parameters.
    BadQuery(String),
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self::Activity(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Activity(err) => {
                let status = match err.kind() {
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string())
            }
            ApiError::BadQuery(detail) => (StatusCode::BAD_REQUEST, detail),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
