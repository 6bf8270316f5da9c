use serde::Serialize;

use crate::exclusion::ExclusionSet;
use crate::model::WordEntry;
use crate::progress::ProgressTracker;

/// Summary counts over the active pool.
///
/// Excluded words count towards `total` but sit in their own bucket; every
/// other word is exactly one of learned, in progress, or not started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub learned: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub excluded: usize,
}

impl Statistics {
    #[must_use]
    pub fn compute<'p, I>(pool: I, tracker: &ProgressTracker, exclusions: &ExclusionSet) -> Self
    where
        I: IntoIterator<Item = &'p WordEntry>,
    {
        let settings = tracker.settings();
        let mut stats = Self::default();

        for entry in pool {
            stats.total += 1;
            let key = entry.greek.as_str();
            if exclusions.contains(key) {
                stats.excluded += 1;
                continue;
            }
            match tracker.streak_of(key) {
                0 => stats.not_started += 1,
                s if settings.is_learned_streak(s) => stats.learned += 1,
                _ => stats.in_progress += 1,
            }
        }

        stats
    }

    /// Learned share of the whole pool, rounded to a whole percent. 0 on an empty pool.
    #[must_use]
    pub fn learned_percent(&self) -> u32 {
        // Rounded ratio is in 0..=100, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.progress_ratio() * 100.0).round() as u32;
        percent
    }

    /// Learned share of the whole pool in `0.0..=1.0`.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.learned as f64 / self.total as f64;
        ratio
    }

    /// Words still in rotation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.in_progress + self.not_started
    }
}
