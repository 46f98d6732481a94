//! Error types for laspad-client

use crate::types::ControlId;
use thiserror::Error;

/// Errors that can occur while driving the laspad server
#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be delivered or its body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server base URL or command target could not be turned into a URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// No control with this id is registered in the session
    #[error("control not found: {0}")]
    ControlNotFound(ControlId),

    /// The branch list has already been fetched for this session
    #[error("branch controls have already been built for this session")]
    AlreadyBootstrapped,

    /// Interactive prompt failed
    #[error("prompt error: {0}")]
    Prompt(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
