use serde::{Deserialize, Serialize};

use crate::model::ids::WordKey;

//
// ─── WORD ENTRY ────────────────────────────────────────────────────────────────
//

/// One vocabulary item as it appears in a word-list source.
///
/// Unknown fields in the source document are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub greek: String,
    pub russian: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl WordEntry {
    #[must_use]
    pub fn new(greek: impl Into<String>, russian: impl Into<String>) -> Self {
        Self {
            greek: greek.into(),
            russian: russian.into(),
            example: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Progress and exclusions are keyed by the Greek spelling.
    #[must_use]
    pub fn key(&self) -> WordKey {
        WordKey::new(self.greek.as_str())
    }

    /// Builds the question/answer view of this entry for the given direction.
    #[must_use]
    pub fn card(&self, direction: Direction) -> Card<'_> {
        let (question, answer) = match direction {
            Direction::GreekToNative => (self.greek.as_str(), self.russian.as_str()),
            Direction::NativeToGreek => (self.russian.as_str(), self.greek.as_str()),
        };
        Card {
            question,
            answer,
            example: self.example.as_deref().filter(|e| !e.trim().is_empty()),
        }
    }
}

//
// ─── DIRECTION ─────────────────────────────────────────────────────────────────
//

/// Which side of a word entry is asked.
///
/// Only affects which field is displayed; selection and progress are the same
/// in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    GreekToNative,
    NativeToGreek,
}

impl Direction {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::GreekToNative => Direction::NativeToGreek,
            Direction::NativeToGreek => Direction::GreekToNative,
        }
    }
}

//
// ─── CARD VIEW ─────────────────────────────────────────────────────────────────
//

/// Borrowed question/answer pair handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub example: Option<&'a str>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
