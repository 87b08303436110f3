// errors.rs
use crate::api::ApiError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the upstream platform API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// No usable session; rendered as a redirect to `/login`.
    #[error("Login required")]
    LoginRequired,

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Internal Server Error")]
    InternalError,

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ServerError::LoginRequired,
            ApiError::NotFound => ServerError::NotFound,
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
