use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    #[error("Unknown medium: {0} (expected presentation, website, app, lp or social)")]
    UnknownMedium(String),

    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;
