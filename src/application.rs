// Application layer modules
pub mod notes_handler;
pub mod request_parser;

// Re-exports
pub use notes_handler::{NotesHandler, NotesHandlerError};
pub use request_parser::RequestParser;
