use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{TrainerSettings, WordKey};

//
// ─── PROGRESS RECORD ───────────────────────────────────────────────────────────
//

/// Answer history of one word.
///
/// `learned` is sticky: once the streak reaches the learned threshold the flag
/// stays set, even if a later wrong answer drops the streak back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub correct_streak: u32,
    pub total_attempts: u32,
    pub learned: bool,
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Per-word progress for one learner session.
///
/// Records are created lazily on the first answer and only ever removed in bulk.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    settings: TrainerSettings,
    records: HashMap<WordKey, ProgressRecord>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: TrainerSettings) -> Self {
        Self {
            settings,
            records: HashMap::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    /// Applies one graded answer and returns the updated record.
    ///
    /// Every answer counts as an attempt. A correct answer extends the streak
    /// and may mark the word learned; a wrong one resets the streak only.
    pub fn record_answer(&mut self, key: impl Into<WordKey>, correct: bool) -> ProgressRecord {
        let settings = self.settings;
        let record = self.records.entry(key.into()).or_default();

        record.total_attempts = record.total_attempts.saturating_add(1);
        if correct {
            record.correct_streak = record.correct_streak.saturating_add(1);
            if settings.is_learned_streak(record.correct_streak) {
                record.learned = true;
            }
        } else {
            record.correct_streak = 0;
        }

        *record
    }

    /// Current streak, 0 for words never answered.
    #[must_use]
    pub fn streak_of(&self, key: &str) -> u32 {
        self.records.get(key).map_or(0, |r| r.correct_streak)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProgressRecord> {
        self.records.get(key)
    }

    /// True while the current streak is at or above the learned threshold.
    ///
    /// Unlike [`ProgressRecord::learned`] this drops back after a wrong answer.
    #[must_use]
    pub fn has_learned_streak(&self, key: &str) -> bool {
        self.settings.is_learned_streak(self.streak_of(key))
    }

    /// Words whose sticky `learned` flag is set.
    pub fn learned_words(&self) -> impl Iterator<Item = &WordKey> {
        self.records
            .iter()
            .filter(|(_, r)| r.learned)
            .map(|(k, _)| k)
    }

    /// Words answered at least once that have not reached the threshold.
    pub fn unlearned_words(&self) -> impl Iterator<Item = &WordKey> {
        self.records
            .iter()
            .filter(|(_, r)| !r.learned)
            .map(|(k, _)| k)
    }

    pub fn reset_all(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordKey, &ProgressRecord)> {
        self.records.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_word_has_zero_streak() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.streak_of("ναι"), 0);
        assert!(tracker.get("ναι").is_none());
    }

    #[test]
    fn first_answer_creates_record() {
        let mut tracker = ProgressTracker::new();
        let record = tracker.record_answer("ναι", false);
        assert_eq!(
            record,
            ProgressRecord {
                correct_streak: 0,
                total_attempts: 1,
                learned: false,
            }
        );
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn three_correct_answers_mark_learned() {
        let mut tracker = ProgressTracker::new();
        tracker.record_answer("ναι", true);
        tracker.record_answer("ναι", true);
        assert!(!tracker.get("ναι").unwrap().learned);

        let record = tracker.record_answer("ναι", true);
        assert_eq!(record.correct_streak, 3);
        assert_eq!(record.total_attempts, 3);
        assert!(record.learned);
        assert!(tracker.has_learned_streak("ναι"));
    }

    #[test]
    fn learned_flag_survives_wrong_answer() {
        let mut tracker = ProgressTracker::new();
        for _ in 0..3 {
            tracker.record_answer("ναι", true);
        }
        let record = tracker.record_answer("ναι", false);
        assert_eq!(record.correct_streak, 0);
        assert_eq!(record.total_attempts, 4);
        assert!(record.learned);
        assert!(!tracker.has_learned_streak("ναι"));
        assert_eq!(tracker.learned_words().count(), 1);
    }

    #[test]
    fn wrong_answer_resets_streak_only() {
        let mut tracker = ProgressTracker::new();
        tracker.record_answer("όχι", true);
        tracker.record_answer("όχι", true);
        let record = tracker.record_answer("όχι", false);
        assert_eq!(record.correct_streak, 0);
        assert_eq!(record.total_attempts, 3);
        assert!(!record.learned);
        assert_eq!(tracker.unlearned_words().count(), 1);
    }

    #[test]
    fn reset_then_replay_reproduces_records() {
        let answers = [
            ("ναι", true),
            ("όχι", false),
            ("ναι", true),
            ("ναι", false),
            ("όχι", true),
        ];
        let mut tracker = ProgressTracker::new();
        for (key, correct) in answers {
            tracker.record_answer(key, correct);
        }
        let first_run: HashMap<WordKey, ProgressRecord> =
            tracker.iter().map(|(k, r)| (k.clone(), *r)).collect();

        tracker.reset_all();
        assert!(tracker.is_empty());

        for (key, correct) in answers {
            tracker.record_answer(key, correct);
        }
        let second_run: HashMap<WordKey, ProgressRecord> =
            tracker.iter().map(|(k, r)| (k.clone(), *r)).collect();
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let settings = TrainerSettings::new(2, 3).unwrap();
        let mut tracker = ProgressTracker::with_settings(settings);
        tracker.record_answer("ναι", true);
        let record = tracker.record_answer("ναι", true);
        assert!(record.learned);
    }
}
