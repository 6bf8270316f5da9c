use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("learned threshold must be > 0")]
    InvalidLearnedThreshold,

    #[error("base weight ({base_weight}) must be >= learned threshold ({threshold})")]
    InvalidBaseWeight { base_weight: u32, threshold: u32 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tuning knobs for mastery tracking and card selection.
///
/// The defaults reproduce the classic rule: three correct answers in a row mark a
/// word learned, and a word with streak `s` is drawn with weight `max(1, 4 - s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerSettings {
    learned_threshold: u32,
    base_weight: u32,
}

impl TrainerSettings {
    pub const DEFAULT_LEARNED_THRESHOLD: u32 = 3;
    pub const DEFAULT_BASE_WEIGHT: u32 = 4;

    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the threshold is zero or the base weight
    /// cannot keep unlearned words above the minimum weight.
    pub fn new(learned_threshold: u32, base_weight: u32) -> Result<Self, SettingsError> {
        if learned_threshold == 0 {
            return Err(SettingsError::InvalidLearnedThreshold);
        }
        if base_weight < learned_threshold {
            return Err(SettingsError::InvalidBaseWeight {
                base_weight,
                threshold: learned_threshold,
            });
        }
        Ok(Self {
            learned_threshold,
            base_weight,
        })
    }

    #[must_use]
    pub fn learned_threshold(&self) -> u32 {
        self.learned_threshold
    }

    #[must_use]
    pub fn base_weight(&self) -> u32 {
        self.base_weight
    }

    /// Returns true when a streak is long enough to count as learned.
    #[must_use]
    pub fn is_learned_streak(&self, streak: u32) -> bool {
        streak >= self.learned_threshold
    }

    /// Draw weight for a word with the given streak. Never below 1.
    #[must_use]
    pub fn weight_for(&self, streak: u32) -> u32 {
        self.base_weight.saturating_sub(streak).max(1)
    }
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            learned_threshold: Self::DEFAULT_LEARNED_THRESHOLD,
            base_weight: Self::DEFAULT_BASE_WEIGHT,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
