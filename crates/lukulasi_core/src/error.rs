//! Application error types for core domain logic.
use crate::extract::ExtractError;
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Selected text is too long to translate")]
    SelectionTooLong,

    #[error("Translation error")]
    TranslationFailed,

    #[error("Content not found")]
    ContentNotFound,

    #[error("Translation provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error(transparent)]
    Document(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::Error),

    #[error("Storage error: {0}")]
    StorageMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<redb::DatabaseError> for AppError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<redb::TransactionError> for AppError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<redb::TableError> for AppError {
    fn from(value: redb::TableError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<redb::StorageError> for AppError {
    fn from(value: redb::StorageError) -> Self {
        Self::Storage(value.into())
    }
}

impl From<redb::CommitError> for AppError {
    fn from(value: redb::CommitError) -> Self {
        Self::Storage(value.into())
    }
}
