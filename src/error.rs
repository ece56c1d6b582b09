use thiserror::Error;

#[derive(Error, Debug)]
pub enum KisanError {
    #[error(transparent)]
    Common(#[from] kisan_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a supported image: {0}")]
    UnsupportedImage(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KisanError {
    /// Collapse into the shared error type the state machines understand
    pub fn into_common(self) -> kisan_common::Error {
        match self {
            KisanError::Common(e) => e,
            KisanError::Status { status, .. } => kisan_common::Error::Http { status },
            KisanError::JsonParse(e) => kisan_common::Error::Json(e),
            KisanError::Config(msg) => kisan_common::Error::Config(msg),
            KisanError::UnsupportedImage(name) => kisan_common::Error::NotAnImage(name),
            other => kisan_common::Error::Network(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, KisanError>;
