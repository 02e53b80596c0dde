//! Client error types.

use thiserror::Error;

/// Errors raised by the API client facade.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;
