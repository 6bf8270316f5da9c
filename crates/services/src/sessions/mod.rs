mod service;
mod shared;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::{AnswerOutcome, TrainerSession};
pub use shared::SharedSession;
