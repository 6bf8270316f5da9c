#![forbid(unsafe_code)]

pub mod error;
pub mod logging;
pub mod sessions;
pub mod vocabulary_service;

pub use vocab_core::Clock;

pub use error::{SessionError, VocabularyServiceError};
pub use sessions::{AnswerOutcome, SharedSession, TrainerSession};
pub use vocabulary_service::{LoadReport, VocabularyService};
