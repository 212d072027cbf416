//! Error types for bscscan-logs

use crate::query::FieldKey;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Query assembly errors
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Explorer API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while assembling a log query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {field}: {value:?}. It must be an integer or \"latest\"")]
    InvalidBlockSpecifier { field: FieldKey, value: String },
}

/// Errors returned by the explorer transport
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer returned HTTP status {status}")]
    Status { status: u16 },

    #[error("Explorer rejected request: {message} ({result})")]
    Rejected { message: String, result: String },

    #[error("Invalid response from explorer: {0}")]
    InvalidResponse(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
