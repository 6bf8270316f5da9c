//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use vocab_core::LoadError;
use vocab_core::model::SourceId;

/// Errors emitted by `VocabularyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyServiceError {
    #[error("word list {0} contains no words")]
    Empty(SourceId),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by trainer sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no card is being shown")]
    NoCurrentCard,
    #[error("the answer has not been revealed yet")]
    AnswerHidden,
    #[error("unknown word list: {0}")]
    SourceNotFound(SourceId),
    #[error("session state unavailable: {0}")]
    Unavailable(String),
}
