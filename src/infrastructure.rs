// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod note_repository;

// Re-exports
pub use config::{ConfigError, DynamoDbConfig, StoreSettings};
pub use logging::init_logging;
pub use note_repository::{DynamoNoteRepository, NoteRepository, RepositoryError};
