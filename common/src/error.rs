//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Please select a file first!")]
    NoFileSelected,

    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
