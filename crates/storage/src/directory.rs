use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vocab_core::model::SourceId;

use crate::repository::{StorageError, WordListRepository, validate_source_name};

/// Word lists stored as `*.json` files in a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    root: PathBuf,
}

impl DirectoryRepository {
    /// Opens the directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::debug!(root = %root.display(), "vocabulary directory ready");
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &SourceId) -> Result<PathBuf, StorageError> {
        validate_source_name(id)?;
        Ok(self.root.join(id.as_str()))
    }
}

fn not_found_aware(err: std::io::Error) -> StorageError {
    if err.kind() == ErrorKind::NotFound {
        StorageError::NotFound
    } else {
        StorageError::Io(err)
    }
}

#[async_trait]
impl WordListRepository for DirectoryRepository {
    async fn list_sources(&self) -> Result<Vec<SourceId>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };
            let id = SourceId::new(name);
            if validate_source_name(&id).is_ok() {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn read_source(&self, id: &SourceId) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(id)?;
        tokio::fs::read(&path).await.map_err(not_found_aware)
    }

    async fn save_source(&self, id: &SourceId, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved word list");
        Ok(())
    }

    async fn delete_source(&self, id: &SourceId) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        tokio::fs::remove_file(&path).await.map_err(not_found_aware)?;
        tracing::debug!(path = %path.display(), "deleted word list");
        Ok(())
    }
}
