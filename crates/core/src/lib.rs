#![forbid(unsafe_code)]

pub mod error;
pub mod exclusion;
pub mod model;
pub mod progress;
pub mod selector;
pub mod stats;
pub mod time;
pub mod vocabulary;

pub use error::Error;
pub use exclusion::ExclusionSet;
pub use progress::{ProgressRecord, ProgressTracker};
pub use selector::CardSelector;
pub use stats::Statistics;
pub use time::Clock;
pub use vocabulary::{LoadError, VocabularyStore, WordList};
