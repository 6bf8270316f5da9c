use std::sync::{Arc, Mutex};

use vocab_core::Statistics;
use vocab_core::model::{WordEntry, WordKey};

use super::service::{AnswerOutcome, TrainerSession};
use crate::error::SessionError;

/// A session that several callers (request handlers, threads) act on.
///
/// Every operation takes the lock once and applies the whole mutation under
/// it, so concurrent answers or exclusions are never lost.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<TrainerSession>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: TrainerSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` if a previous holder panicked.
    pub fn with<T>(&self, f: impl FnOnce(&mut TrainerSession) -> T) -> Result<T, SessionError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        Ok(f(&mut *guard))
    }

    /// Owned copy of the card on screen, drawing one if needed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` if the lock is poisoned.
    pub fn current_card(&self) -> Result<Option<WordEntry>, SessionError> {
        self.with(|s| {
            s.current_card();
            s.state().current_card().cloned()
        })
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoCurrentCard` without a card to reveal.
    pub fn reveal_answer(&self) -> Result<(), SessionError> {
        self.with(|s| s.reveal_answer().map(|_| ()))?
    }

    /// # Errors
    ///
    /// See [`TrainerSession::answer`].
    pub fn answer(&self, correct: bool) -> Result<AnswerOutcome, SessionError> {
        self.with(|s| s.answer(correct))?
    }

    /// # Errors
    ///
    /// See [`TrainerSession::exclude_current`].
    pub fn exclude_current(&self) -> Result<WordKey, SessionError> {
        self.with(TrainerSession::exclude_current)?
    }

    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` if the lock is poisoned.
    pub fn reset_progress(&self) -> Result<(), SessionError> {
        self.with(TrainerSession::reset_progress)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` if the lock is poisoned.
    pub fn restore_excluded(&self) -> Result<(), SessionError> {
        self.with(TrainerSession::restore_excluded)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` if the lock is poisoned.
    pub fn statistics(&self) -> Result<Statistics, SessionError> {
        self.with(|s| s.statistics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use vocab_core::model::{SourceId, TrainerSettings};
    use vocab_core::time::fixed_clock;
    use vocab_core::{VocabularyStore, WordList};

    fn shared(words: &[&str]) -> SharedSession {
        let mut store = VocabularyStore::new();
        store.insert(WordList::new(
            SourceId::new("shared.json"),
            words.iter().map(|w| WordEntry::new(*w, "-")).collect(),
        ));
        store.enable("shared.json");
        SharedSession::new(TrainerSession::new(
            store,
            TrainerSettings::default(),
            &fixed_clock(),
        ))
    }

    #[test]
    fn concurrent_cycles_lose_no_answers() {
        let session = shared(&["ένα", "δύο", "τρία"]);
        let threads = 8;
        let rounds = 50;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let session = session.clone();
                thread::spawn(move || {
                    for _ in 0..rounds {
                        session
                            .with(|s| {
                                s.current_card();
                                s.reveal_answer()?;
                                s.answer(false)
                            })
                            .unwrap()
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let (answers, attempts) = session
            .with(|s| {
                let attempts: u32 = s.tracker().iter().map(|(_, r)| r.total_attempts).sum();
                (s.answers_given(), attempts)
            })
            .unwrap();
        assert_eq!(answers, threads * rounds);
        assert_eq!(attempts, threads * rounds);
    }

    #[test]
    fn wrapper_runs_full_cycle() {
        let session = shared(&["ναι"]);
        let card = session.current_card().unwrap().unwrap();
        assert_eq!(card.greek, "ναι");

        assert!(matches!(
            session.answer(true),
            Err(SessionError::AnswerHidden)
        ));
        session.reveal_answer().unwrap();
        let key = session.exclude_current().unwrap();
        assert_eq!(key.as_str(), "ναι");
        assert_eq!(session.statistics().unwrap().excluded, 1);

        session.restore_excluded().unwrap();
        session.reset_progress().unwrap();
        assert_eq!(session.statistics().unwrap().not_started, 1);
    }
}
