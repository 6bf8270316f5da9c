use std::path::{Path, PathBuf};

/// Environment variable that overrides the vocabulary directory.
pub const VOCAB_DIR_ENV: &str = "VOCAB_DIR";

/// Directory name used under the home directory when no override is set.
pub const DEFAULT_DIR_NAME: &str = ".greek_flashcards";

/// Where word-list files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    vocabulary_dir: PathBuf,
}

impl StorageConfig {
    #[must_use]
    pub fn new(vocabulary_dir: impl Into<PathBuf>) -> Self {
        Self {
            vocabulary_dir: vocabulary_dir.into(),
        }
    }

    /// Reads `VOCAB_DIR`, falling back to `~/.greek_flashcards`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(VOCAB_DIR_ENV).ok(), dirs::home_dir())
    }

    /// Picks the directory from an explicit override or a home directory.
    ///
    /// Blank overrides are ignored. Without a home directory the default name
    /// is used relative to the working directory.
    #[must_use]
    pub fn resolve(override_dir: Option<String>, home: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
            return Self::new(dir);
        }
        let base = home.unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(DEFAULT_DIR_NAME))
    }

    #[must_use]
    pub fn vocabulary_dir(&self) -> &Path {
        &self.vocabulary_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let config = StorageConfig::resolve(Some("/srv/words".into()), Some("/home/u".into()));
        assert_eq!(config.vocabulary_dir(), Path::new("/srv/words"));
    }

    #[test]
    fn blank_override_falls_back_to_home() {
        let config = StorageConfig::resolve(Some("  ".into()), Some("/home/u".into()));
        assert_eq!(
            config.vocabulary_dir(),
            Path::new("/home/u/.greek_flashcards")
        );
    }

    #[test]
    fn explicit_directory_is_kept_verbatim() {
        let config = StorageConfig::new("/srv/words");
        assert_eq!(config, StorageConfig::resolve(Some("/srv/words".into()), None));
        assert_eq!(config.vocabulary_dir(), Path::new("/srv/words"));
    }

    #[test]
    fn missing_home_uses_working_directory() {
        let config = StorageConfig::resolve(None, None);
        assert_eq!(config.vocabulary_dir(), Path::new("./.greek_flashcards"));
    }
}
