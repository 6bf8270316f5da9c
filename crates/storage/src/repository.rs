use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use vocab_core::model::SourceId;

use crate::config::StorageConfig;
use crate::directory::DirectoryRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("invalid source name: {0:?}")]
    InvalidName(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Checks that a source id is a plain `*.json` file name.
///
/// # Errors
///
/// Returns `StorageError::InvalidName` for empty names, path separators,
/// or names without a `.json` extension.
pub fn validate_source_name(id: &SourceId) -> Result<(), StorageError> {
    let name = id.as_str();
    let stem = name.strip_suffix(".json").unwrap_or_default();
    let has_separator = name.contains(['/', '\\']);
    if stem.trim().is_empty() || stem.starts_with('.') || has_separator {
        return Err(StorageError::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Repository contract for raw word-list documents.
///
/// Repositories only move bytes; parsing belongs to the vocabulary store.
#[async_trait]
pub trait WordListRepository: Send + Sync {
    /// List stored sources ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be listed.
    async fn list_sources(&self) -> Result<Vec<SourceId>, StorageError>;

    /// Fetch the raw document of a source.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn read_source(&self, id: &SourceId) -> Result<Vec<u8>, StorageError>;

    /// Persist or overwrite a source document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidName` for unusable names, or other storage errors.
    async fn save_source(&self, id: &SourceId, bytes: &[u8]) -> Result<(), StorageError>;

    /// Delete a source document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_source(&self, id: &SourceId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    documents: Arc<Mutex<BTreeMap<SourceId, Vec<u8>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl WordListRepository for InMemoryRepository {
    async fn list_sources(&self) -> Result<Vec<SourceId>, StorageError> {
        let guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.keys().cloned().collect())
    }

    async fn read_source(&self, id: &SourceId) -> Result<Vec<u8>, StorageError> {
        let guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(id).cloned().ok_or(StorageError::NotFound)
    }

    async fn save_source(&self, id: &SourceId, bytes: &[u8]) -> Result<(), StorageError> {
        validate_source_name(id)?;
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(id.clone(), bytes.to_vec());
        Ok(())
    }

    async fn delete_source(&self, id: &SourceId) -> Result<(), StorageError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(id).map(|_| ()).ok_or(StorageError::NotFound)
    }
}

/// Word-list storage behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub word_lists: Arc<dyn WordListRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            word_lists: Arc::new(InMemoryRepository::new()),
        }
    }

    /// Opens the vocabulary directory named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn directory(config: &StorageConfig) -> Result<Self, StorageError> {
        let repo = DirectoryRepository::open(config.vocabulary_dir()).await?;
        Ok(Self {
            word_lists: Arc::new(repo),
        })
    }
}
