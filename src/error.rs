use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitterError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Backend responded with status {0}")]
    StatusError(reqwest::StatusCode),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Worker runtime error: {message}")]
    RuntimeError { message: String },
}

impl SplitterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitterError>;
