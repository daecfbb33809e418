use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Failed to decode OUI dataset: {0}")]
    DecodeError(String),

    #[error("OUI feed error: {0}")]
    FeedError(String),

    #[error("Failed to write OUI dataset: {0}")]
    WriteError(String),

    #[error("Invalid OUI: {0}")]
    InvalidOui(String),

    #[error("Invalid company info for OUI {0}")]
    InvalidCompanyInfo(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
