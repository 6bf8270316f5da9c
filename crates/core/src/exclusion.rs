use std::collections::HashSet;

use crate::model::WordKey;

/// Words the learner removed from the current session's rotation.
///
/// Independent of learned status; cleared only in bulk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    keys: HashSet<WordKey>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Returns false if it was already excluded.
    pub fn exclude(&mut self, key: impl Into<WordKey>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn restore_all(&mut self) {
        self.keys.clear();
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordKey> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_is_idempotent() {
        let mut set = ExclusionSet::new();
        assert!(set.exclude("ναι"));
        assert!(!set.exclude("ναι"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("ναι"));
    }

    #[test]
    fn restore_all_clears() {
        let mut set = ExclusionSet::new();
        set.exclude("ναι");
        set.exclude(WordKey::new("όχι"));
        set.restore_all();
        assert!(set.is_empty());
        assert!(!set.contains("ναι"));
    }
}
