// Domain layer modules
pub mod api_message;
pub mod note;
pub mod route;

// Re-exports
pub use api_message::ApiMessage;
pub use note::Note;
pub use route::Route;
