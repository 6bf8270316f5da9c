#![forbid(unsafe_code)]

pub mod config;
pub mod directory;
pub mod repository;

pub use config::StorageConfig;
pub use directory::DirectoryRepository;
pub use repository::{InMemoryRepository, Storage, StorageError, WordListRepository};
