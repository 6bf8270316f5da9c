use chrono::{DateTime, Utc};
use rand::Rng;

use vocab_core::model::{
    Card, Direction, SessionPhase, SessionState, SourceId, TrainerSettings, WordEntry, WordKey,
};
use vocab_core::{
    CardSelector, Clock, ExclusionSet, ProgressRecord, ProgressTracker, Statistics,
    VocabularyStore,
};

use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// What happened to a word after the learner graded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub key: WordKey,
    pub correct: bool,
    pub record: ProgressRecord,
    /// True only on the answer that first marked the word learned.
    pub newly_learned: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's training session.
///
/// Owns the loaded vocabulary, per-word progress, the exclusion set and the
/// card on screen. Each card goes question → revealed → graded; excluding the
/// word is the only other way out of the revealed phase. Either exit clears
/// the card, and the next call to [`current_card`](Self::current_card) draws
/// a new one.
#[derive(Debug, Clone)]
pub struct TrainerSession {
    vocabulary: VocabularyStore,
    tracker: ProgressTracker,
    exclusions: ExclusionSet,
    state: SessionState,
    started_at: DateTime<Utc>,
    answers_given: u32,
}

impl TrainerSession {
    /// `clock` only stamps the start time, keeping sessions deterministic in tests.
    #[must_use]
    pub fn new(vocabulary: VocabularyStore, settings: TrainerSettings, clock: &Clock) -> Self {
        Self {
            vocabulary,
            tracker: ProgressTracker::with_settings(settings),
            exclusions: ExclusionSet::new(),
            state: SessionState::default(),
            started_at: clock.now(),
            answers_given: 0,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.state.set_direction(direction);
        self
    }

    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    /// Mutable access for loading, uploading and removing sources.
    pub fn vocabulary_mut(&mut self) -> &mut VocabularyStore {
        &mut self.vocabulary
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Graded answers since the session started. Excluded cards do not count.
    #[must_use]
    pub fn answers_given(&self) -> u32 {
        self.answers_given
    }

    /// Changes which side is asked. The card on screen stays.
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    /// Switches a loaded word list on or off.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SourceNotFound` if no such list is loaded.
    pub fn set_source_enabled(&mut self, id: &SourceId, enabled: bool) -> Result<(), SessionError> {
        if !self.vocabulary.set_enabled(id.as_str(), enabled) {
            return Err(SessionError::SourceNotFound(id.clone()));
        }
        Ok(())
    }

    /// Card on screen, drawing one with the thread RNG when none is held.
    pub fn current_card(&mut self) -> Option<Card<'_>> {
        self.current_card_with(&mut rand::rng())
    }

    /// Card on screen, drawing one with `rng` when none is held.
    ///
    /// `None` means every word in the active pool is learned or excluded.
    pub fn current_card_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card<'_>> {
        if self.state.current_card().is_none() {
            let drawn = {
                let pool = self.vocabulary.active_pool();
                CardSelector::new(&self.tracker, &self.exclusions)
                    .next_card(pool, rng)
                    .cloned()
            };
            match drawn {
                Some(entry) => {
                    tracing::debug!(word = %entry.greek, "drew next card");
                    self.state.present(entry);
                }
                None => tracing::debug!("no card left to draw"),
            }
        }

        let direction = self.state.direction();
        self.state.current_card().map(|entry| entry.card(direction))
    }

    /// Streak of the word on screen, for the progress indicator.
    #[must_use]
    pub fn current_streak(&self) -> Option<u32> {
        self.state
            .current_card()
            .map(|entry| self.tracker.streak_of(&entry.greek))
    }

    /// Flips the card on screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoCurrentCard` if no card is held.
    pub fn reveal_answer(&mut self) -> Result<Card<'_>, SessionError> {
        if !self.state.reveal() {
            return Err(SessionError::NoCurrentCard);
        }
        let direction = self.state.direction();
        self.state
            .current_card()
            .map(|entry| entry.card(direction))
            .ok_or(SessionError::NoCurrentCard)
    }

    /// Grades the revealed card and clears it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoCurrentCard` without a card and
    /// `SessionError::AnswerHidden` before the answer is revealed.
    pub fn answer(&mut self, correct: bool) -> Result<AnswerOutcome, SessionError> {
        let key = self.revealed_key()?;
        let was_learned = self.tracker.get(key.as_str()).is_some_and(|r| r.learned);

        let record = self.tracker.record_answer(key.clone(), correct);
        self.state.clear();
        self.answers_given = self.answers_given.saturating_add(1);

        tracing::debug!(
            word = %key,
            correct,
            streak = record.correct_streak,
            attempts = record.total_attempts,
            "answer recorded"
        );

        Ok(AnswerOutcome {
            key,
            correct,
            record,
            newly_learned: record.learned && !was_learned,
        })
    }

    /// Removes the revealed word from rotation without grading it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`answer`](Self::answer).
    pub fn exclude_current(&mut self) -> Result<WordKey, SessionError> {
        let key = self.revealed_key()?;
        self.exclusions.exclude(key.clone());
        self.state.clear();
        tracing::debug!(word = %key, "word excluded from session");
        Ok(key)
    }

    fn revealed_key(&self) -> Result<WordKey, SessionError> {
        let entry: &WordEntry = self
            .state
            .current_card()
            .ok_or(SessionError::NoCurrentCard)?;
        if !self.state.answer_revealed() {
            return Err(SessionError::AnswerHidden);
        }
        Ok(entry.key())
    }

    /// Forgets all progress. Exclusions are kept.
    pub fn reset_progress(&mut self) {
        let cleared = self.tracker.len();
        self.tracker.reset_all();
        self.state.clear();
        tracing::info!(records = cleared, "progress reset");
    }

    /// Puts every excluded word back into rotation.
    pub fn restore_excluded(&mut self) {
        let restored = self.exclusions.len();
        self.exclusions.restore_all();
        self.state.clear();
        tracing::info!(words = restored, "excluded words restored");
    }

    /// Starts over once nothing is left to draw. Returns false, changing
    /// nothing, while cards remain.
    pub fn restart(&mut self) -> bool {
        if !self.is_exhausted() {
            return false;
        }
        self.reset_progress();
        true
    }

    /// True when no card is held and none can be drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        if self.state.current_card().is_some() {
            return false;
        }
        let selector = CardSelector::new(&self.tracker, &self.exclusions);
        self.vocabulary
            .active_pool()
            .into_iter()
            .all(|entry| selector.weight_of(entry).is_none())
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(
            self.vocabulary.active_pool(),
            &self.tracker,
            &self.exclusions,
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vocab_core::WordList;
    use vocab_core::time::fixed_clock;

    fn session_with(words: &[(&str, &str)]) -> TrainerSession {
        let mut store = VocabularyStore::new();
        store.insert(WordList::new(
            SourceId::new("test.json"),
            words.iter().map(|(g, r)| WordEntry::new(*g, *r)).collect(),
        ));
        store.enable("test.json");
        TrainerSession::new(store, TrainerSettings::default(), &fixed_clock())
    }

    fn show_and_reveal(session: &mut TrainerSession, rng: &mut StdRng) -> String {
        let question = session
            .current_card_with(rng)
            .expect("card available")
            .question
            .to_owned();
        session.reveal_answer().unwrap();
        question
    }

    #[test]
    fn current_card_is_sticky_until_answered() {
        let mut session = session_with(&[("ένα", "один"), ("δύο", "два"), ("τρία", "три")]);
        let mut rng = StdRng::seed_from_u64(11);

        let first = session.current_card_with(&mut rng).unwrap().question.to_owned();
        for _ in 0..10 {
            let again = session.current_card_with(&mut rng).unwrap().question.to_owned();
            assert_eq!(again, first);
        }
        assert_eq!(session.phase(), SessionPhase::Question);
    }

    #[test]
    fn answer_requires_revealed_card() {
        let mut session = session_with(&[("ναι", "да")]);
        assert!(matches!(
            session.answer(true),
            Err(SessionError::NoCurrentCard)
        ));

        let mut rng = StdRng::seed_from_u64(1);
        session.current_card_with(&mut rng).unwrap();
        assert!(matches!(session.answer(true), Err(SessionError::AnswerHidden)));
        assert!(matches!(
            session.exclude_current(),
            Err(SessionError::AnswerHidden)
        ));
        assert_eq!(session.answers_given(), 0);
    }

    #[test]
    fn reveal_without_card_fails() {
        let mut session = session_with(&[("ναι", "да")]);
        assert!(matches!(
            session.reveal_answer(),
            Err(SessionError::NoCurrentCard)
        ));
    }

    #[test]
    fn answering_clears_card_and_updates_progress() {
        let mut session = session_with(&[("ναι", "да")]);
        let mut rng = StdRng::seed_from_u64(2);
        show_and_reveal(&mut session, &mut rng);

        let outcome = session.answer(true).unwrap();
        assert_eq!(outcome.key, WordKey::new("ναι"));
        assert_eq!(outcome.record.correct_streak, 1);
        assert!(!outcome.newly_learned);
        assert_eq!(session.phase(), SessionPhase::AwaitingCard);
        assert!(!session.state().answer_revealed());
        assert_eq!(session.answers_given(), 1);
    }

    #[test]
    fn newly_learned_fires_once() {
        let mut session = session_with(&[("ναι", "да")]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut flags = Vec::new();
        for correct in [false, true, true, true] {
            show_and_reveal(&mut session, &mut rng);
            flags.push(session.answer(correct).unwrap().newly_learned);
        }
        assert_eq!(flags, vec![false, false, false, true]);
        assert!(session.current_card_with(&mut rng).is_none());
    }

    #[test]
    fn direction_swaps_question_and_answer() {
        let mut session =
            session_with(&[("ναι", "да")]).with_direction(Direction::NativeToGreek);
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(session.current_card_with(&mut rng).unwrap().question, "да");
        assert_eq!(session.reveal_answer().unwrap().answer, "ναι");

        session.set_direction(Direction::GreekToNative);
        assert_eq!(session.current_card_with(&mut rng).unwrap().question, "ναι");
    }

    #[test]
    fn current_streak_tracks_shown_word() {
        let mut session = session_with(&[("ναι", "да")]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(session.current_streak(), None);

        show_and_reveal(&mut session, &mut rng);
        session.answer(true).unwrap();
        session.current_card_with(&mut rng).unwrap();
        assert_eq!(session.current_streak(), Some(1));
    }

    #[test]
    fn restart_only_when_exhausted() {
        let mut session = session_with(&[("ναι", "да")]);
        let mut rng = StdRng::seed_from_u64(6);
        assert!(!session.restart());

        for _ in 0..3 {
            show_and_reveal(&mut session, &mut rng);
            session.answer(true).unwrap();
        }
        assert!(session.current_card_with(&mut rng).is_none());
        assert!(session.is_exhausted());

        assert!(session.restart());
        assert!(session.tracker().is_empty());
        assert!(session.current_card_with(&mut rng).is_some());
    }

    #[test]
    fn reset_progress_keeps_exclusions() {
        let mut session = session_with(&[("ναι", "да"), ("όχι", "нет")]);
        let mut rng = StdRng::seed_from_u64(7);
        show_and_reveal(&mut session, &mut rng);
        let excluded = session.exclude_current().unwrap();
        show_and_reveal(&mut session, &mut rng);
        session.answer(true).unwrap();

        session.reset_progress();
        assert!(session.tracker().is_empty());
        assert!(session.exclusions().contains(excluded.as_str()));
        assert_eq!(session.phase(), SessionPhase::AwaitingCard);
    }

    #[test]
    fn restore_excluded_returns_words_to_rotation() {
        let mut session = session_with(&[("ναι", "да")]);
        let mut rng = StdRng::seed_from_u64(8);
        show_and_reveal(&mut session, &mut rng);
        session.exclude_current().unwrap();
        assert!(session.current_card_with(&mut rng).is_none());

        session.restore_excluded();
        assert!(session.exclusions().is_empty());
        assert_eq!(session.current_card_with(&mut rng).unwrap().question, "ναι");
    }

    #[test]
    fn toggling_unknown_source_fails() {
        let mut session = session_with(&[("ναι", "да")]);
        let err = session
            .set_source_enabled(&SourceId::new("missing.json"), true)
            .unwrap_err();
        assert!(matches!(err, SessionError::SourceNotFound(_)));

        session
            .set_source_enabled(&SourceId::new("test.json"), false)
            .unwrap();
        assert_eq!(session.statistics().total, 0);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(session.current_card_with(&mut rng).is_none());
    }

    #[test]
    fn started_at_comes_from_clock() {
        let session = session_with(&[("ναι", "да")]);
        assert_eq!(session.started_at(), vocab_core::time::fixed_now());
    }
}
