use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session rejected by API")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    #[error("API returned {0}: {1}")]
    Status(u16, String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON decode error: {0}")]
    Decode(String),
}
