use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangoutError {
    #[error("Invalid generation spec: {0}")]
    InvalidSpec(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Remote API error: {0}")]
    Remote(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type HangoutResult<T> = Result<T, HangoutError>;
