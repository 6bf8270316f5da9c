mod ids;
mod session;
mod settings;
mod word;

pub use ids::{SourceId, WordKey};
pub use session::{SessionPhase, SessionState};
pub use settings::{SettingsError, TrainerSettings};
pub use word::{Card, Direction, WordEntry};
