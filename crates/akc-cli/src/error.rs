//! CLI error types.

use std::path::PathBuf;

use akc_client::ClientError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No configuration file yet.
    #[error(
        "Config file not found at {}. Please create it with your authentik URL and API token by running `akc init`",
        .path.display()
    )]
    ConfigMissing {
        /// Where the file was expected.
        path: PathBuf,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// API error.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// A referenced resource does not exist.
    #[error("{resource_type} '{id}' not found.")]
    NotFound {
        /// Type of resource.
        resource_type: &'static str,
        /// Identifier as given on the command line.
        id: String,
    },

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { status, body } => Self::Api { status, body },
            ClientError::Http(e) => Self::Connection(e.to_string()),
            ClientError::Json(e) => Self::Json(e),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
