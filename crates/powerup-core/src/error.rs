use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerUpError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Card context unavailable: {0}")]
    CardContextUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
