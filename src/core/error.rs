//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No translation table for declared locale '{0}'")]
    MissingLocaleTable(String),

    #[error("use_language must be called within a LanguageProvider")]
    ProviderMissing,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
