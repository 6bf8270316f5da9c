use std::collections::HashSet;

use thiserror::Error;

use crate::model::{SourceId, WordEntry};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A word-list source could not be turned into entries.
///
/// The failing source is left out of the pool; other sources are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("source {source_id} is malformed: {message}")]
    Malformed { source_id: SourceId, message: String },

    #[error("source {source_id} could not be read: {message}")]
    Unreadable { source_id: SourceId, message: String },
}

impl LoadError {
    #[must_use]
    pub fn source_id(&self) -> &SourceId {
        match self {
            LoadError::Malformed { source_id, .. } | LoadError::Unreadable { source_id, .. } => {
                source_id
            }
        }
    }
}

//
// ─── WORD LIST ─────────────────────────────────────────────────────────────────
//

/// Entries parsed from one source, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    id: SourceId,
    entries: Vec<WordEntry>,
}

impl WordList {
    #[must_use]
    pub fn new(id: SourceId, entries: Vec<WordEntry>) -> Self {
        Self { id, entries }
    }

    /// Parses a word-list document: a JSON array of `{greek, russian, example?}`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` if the document is not such an array.
    pub fn parse(id: SourceId, bytes: &[u8]) -> Result<Self, LoadError> {
        let entries: Vec<WordEntry> =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed {
                source_id: id.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { id, entries })
    }

    #[must_use]
    pub fn id(&self) -> &SourceId {
        &self.id
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Loaded word lists plus the set of sources the learner has switched on.
///
/// Sources keep the order in which they were first inserted; reloading a source
/// replaces its entries in place.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    sources: Vec<WordList>,
    enabled: HashSet<SourceId>,
}

impl VocabularyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a source document. Alias of [`WordList::parse`].
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` for documents that are not word lists.
    pub fn load(id: SourceId, bytes: &[u8]) -> Result<WordList, LoadError> {
        WordList::parse(id, bytes)
    }

    /// Adds or replaces a source. The enabled flag is left untouched.
    pub fn insert(&mut self, list: WordList) -> Option<WordList> {
        match self.sources.iter_mut().find(|s| s.id == list.id) {
            Some(existing) => Some(std::mem::replace(existing, list)),
            None => {
                self.sources.push(list);
                None
            }
        }
    }

    /// Removes a source and forgets whether it was enabled.
    pub fn unload(&mut self, id: &str) -> Option<WordList> {
        self.enabled.remove(id);
        let pos = self.sources.iter().position(|s| s.id.as_str() == id)?;
        Some(self.sources.remove(pos))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.sources.iter().any(|s| s.id.as_str() == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WordList> {
        self.sources.iter().find(|s| s.id.as_str() == id)
    }

    /// Switches a loaded source on. Returns false for unknown sources.
    pub fn enable(&mut self, id: &str) -> bool {
        let Some(id) = self.get(id).map(|list| list.id.clone()) else {
            return false;
        };
        self.enabled.insert(id);
        true
    }

    pub fn disable(&mut self, id: &str) -> bool {
        self.enabled.remove(id)
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        if enabled {
            self.enable(id)
        } else {
            self.disable(id);
            self.contains(id)
        }
    }

    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.contains(id)
    }

    #[must_use]
    pub fn enabled_sources(&self) -> &HashSet<SourceId> {
        &self.enabled
    }

    #[must_use]
    pub fn has_enabled_sources(&self) -> bool {
        !self.enabled.is_empty()
    }

    /// Loaded sources in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &WordList> {
        self.sources.iter()
    }

    #[must_use]
    pub fn word_count(&self, id: &str) -> Option<usize> {
        self.get(id).map(WordList::len)
    }

    /// Entries of every enabled source, source order then entry order.
    ///
    /// No deduplication: a word present in two enabled sources appears twice.
    #[must_use]
    pub fn active_pool(&self) -> Vec<&WordEntry> {
        self.active_pool_for(&self.enabled)
    }

    /// Same as [`active_pool`](Self::active_pool) for an explicit set of sources.
    #[must_use]
    pub fn active_pool_for(&self, enabled: &HashSet<SourceId>) -> Vec<&WordEntry> {
        self.sources
            .iter()
            .filter(|s| enabled.contains(&s.id))
            .flat_map(|s| s.entries.iter())
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
