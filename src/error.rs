use crate::api::transport::{HttpMethod, TransportError};
use crate::schema::{ErrorEnvelope, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown configuration key: {key}")]
    UnknownConfigKey { key: String },
    #[error("Failed to format output: {0}")]
    OutputFormat(String),
}

/// Failure of a single API call.
///
/// The variants keep the three failure classes apart: the request never got
/// an answer (`Transport`), the server rejected it (`Server`), or the body
/// did not match the declared shape (`Validation`, `InvalidErrorBody`).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to [{method} {endpoint}] failed: {message}")]
    Transport {
        method: HttpMethod,
        endpoint: String,
        message: String,
    },
    #[error("Eagle API error [{method} {endpoint}]: {body}")]
    Server {
        method: HttpMethod,
        endpoint: String,
        status: u16,
        body: ErrorEnvelope,
    },
    #[error("Unexpected response shape from [{method} {endpoint}] (HTTP {status}): {source}")]
    Validation {
        method: HttpMethod,
        endpoint: String,
        status: u16,
        source: ValidationError,
    },
    #[error("Unreadable error response from [{method} {endpoint}] (HTTP {status}): {source}")]
    InvalidErrorBody {
        method: HttpMethod,
        endpoint: String,
        status: u16,
        source: ValidationError,
    },
    #[error("Failed to encode request for {endpoint}: {message}")]
    Serialization { endpoint: String, message: String },
    /// The HTTP client could not be constructed; no request was attempted.
    #[error("Failed to create HTTP client: {source}")]
    ClientSetup { source: TransportError },
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::InvalidErrorBody { status, .. } => Some(*status),
            ApiError::Transport { .. }
            | ApiError::Serialization { .. }
            | ApiError::ClientSetup { .. } => None,
        }
    }

    /// Path of the endpoint the failed call was addressed to.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Server { endpoint, .. }
            | ApiError::Validation { endpoint, .. }
            | ApiError::InvalidErrorBody { endpoint, .. }
            | ApiError::Serialization { endpoint, .. } => Some(endpoint),
            ApiError::ClientSetup { .. } => None,
        }
    }

    /// Server-supplied message for API-reported failures.
    pub fn message(&self) -> Option<String> {
        match self {
            ApiError::Server { body, .. } => Some(body.message()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "info",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Transport { .. } | ApiError::ClientSetup { .. } => ErrorSeverity::High,
                ApiError::Validation { .. } | ApiError::InvalidErrorBody { .. } => {
                    ErrorSeverity::Critical
                }
                ApiError::Server { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Transport { .. }) => Some(
                "Make sure Eagle is running and its API is reachable (default localhost:41595)"
                    .to_string(),
            ),
            AppError::Api(ApiError::Validation { .. } | ApiError::InvalidErrorBody { .. }) => {
                Some("The Eagle version in use may return a different response format".to_string())
            }
            AppError::Api(api_error) if api_error.is_not_found() => {
                Some("'eagle-cli item list' or 'eagle-cli folder list' to see valid IDs".to_string())
            }
            AppError::Cli(CliError::UnknownConfigKey { .. }) => {
                Some("Valid keys are: host, port, timeout".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the config file, then try again".to_string())
            }
            _ => None,
        }
    }
}
