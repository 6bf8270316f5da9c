use crate::model::word::{Direction, WordEntry};

/// Where the current card is in its question → answer → graded cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No card is held; the next render draws one.
    AwaitingCard,
    /// The question side is shown.
    Question,
    /// The answer side is shown and the learner can grade or exclude the word.
    Revealed,
}

/// Per-learner view state: the card on screen, whether its answer is
/// visible, and the translation direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_card: Option<WordEntry>,
    answer_revealed: bool,
    direction: Direction,
}

impl SessionState {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            current_card: None,
            answer_revealed: false,
            direction,
        }
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&WordEntry> {
        self.current_card.as_ref()
    }

    #[must_use]
    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.current_card, self.answer_revealed) {
            (None, _) => SessionPhase::AwaitingCard,
            (Some(_), false) => SessionPhase::Question,
            (Some(_), true) => SessionPhase::Revealed,
        }
    }

    /// Puts a freshly drawn card on screen, question side up.
    pub fn present(&mut self, card: WordEntry) {
        self.current_card = Some(card);
        self.answer_revealed = false;
    }

    /// Flips the current card. Returns false when there is no card to flip.
    pub fn reveal(&mut self) -> bool {
        if self.current_card.is_none() {
            return false;
        }
        self.answer_revealed = true;
        true
    }

    /// Drops the current card so the next render draws a new one.
    pub fn clear(&mut self) -> Option<WordEntry> {
        self.answer_revealed = false;
        self.current_card.take()
    }
}
