use std::sync::Arc;

use storage::repository::{StorageError, WordListRepository, validate_source_name};
use vocab_core::model::SourceId;
use vocab_core::{LoadError, VocabularyStore, WordList};

use crate::error::VocabularyServiceError;

/// Outcome of scanning storage for word lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Sources parsed and inserted into the store.
    pub loaded: Vec<SourceId>,
    /// Sources already in the store or holding no words.
    pub skipped: Vec<SourceId>,
    /// Sources that could not be read or parsed; they stay out of the pool.
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Moves word lists between storage and a session's vocabulary store.
#[derive(Clone)]
pub struct VocabularyService {
    word_lists: Arc<dyn WordListRepository>,
}

impl VocabularyService {
    #[must_use]
    pub fn new(word_lists: Arc<dyn WordListRepository>) -> Self {
        Self { word_lists }
    }

    /// Read and parse one stored source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Unreadable` if storage fails and
    /// `LoadError::Malformed` if the document is not a word list.
    pub async fn load_source(&self, id: &SourceId) -> Result<WordList, LoadError> {
        let bytes = self
            .word_lists
            .read_source(id)
            .await
            .map_err(|e| LoadError::Unreadable {
                source_id: id.clone(),
                message: e.to_string(),
            })?;
        VocabularyStore::load(id.clone(), &bytes)
    }

    /// Load every stored source not yet in the store.
    ///
    /// New sources start disabled. A broken source is logged and reported,
    /// never fatal to the others.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if the sources cannot be listed.
    pub async fn load_all(
        &self,
        store: &mut VocabularyStore,
    ) -> Result<LoadReport, VocabularyServiceError> {
        let mut report = LoadReport::default();

        for id in self.word_lists.list_sources().await? {
            if store.contains(id.as_str()) {
                report.skipped.push(id);
                continue;
            }
            match self.load_source(&id).await {
                Ok(list) if list.is_empty() => {
                    tracing::debug!(source = %id, "skipping empty word list");
                    report.skipped.push(id);
                }
                Ok(list) => {
                    tracing::debug!(source = %id, words = list.len(), "loaded word list");
                    store.insert(list);
                    report.loaded.push(id);
                }
                Err(err) => {
                    tracing::warn!(source = %id, error = %err, "word list left out of the pool");
                    report.failures.push(err);
                }
            }
        }

        Ok(report)
    }

    /// Store a new word list and switch it on.
    ///
    /// The document is parsed before anything is written, so a rejected upload
    /// leaves storage untouched. Returns the number of words added.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` for invalid names or write failures,
    /// `VocabularyServiceError::Load` for malformed documents and
    /// `VocabularyServiceError::Empty` for lists without words.
    pub async fn upload(
        &self,
        store: &mut VocabularyStore,
        id: SourceId,
        bytes: &[u8],
    ) -> Result<usize, VocabularyServiceError> {
        validate_source_name(&id)?;
        let list = VocabularyStore::load(id.clone(), bytes)?;
        if list.is_empty() {
            return Err(VocabularyServiceError::Empty(id));
        }

        self.word_lists.save_source(&id, bytes).await?;

        let words = list.len();
        store.insert(list);
        store.enable(id.as_str());
        tracing::info!(source = %id, words, "word list uploaded");
        Ok(words)
    }

    /// Delete a word list from storage and from the store.
    ///
    /// A source already missing from storage is still unloaded.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if deletion fails.
    pub async fn remove(
        &self,
        store: &mut VocabularyStore,
        id: &SourceId,
    ) -> Result<Option<WordList>, VocabularyServiceError> {
        match self.word_lists.delete_source(id).await {
            Ok(()) | Err(StorageError::NotFound) => {}
            Err(err) => return Err(err.into()),
        }
        let removed = store.unload(id.as_str());
        tracing::info!(source = %id, was_loaded = removed.is_some(), "word list removed");
        Ok(removed)
    }
}
