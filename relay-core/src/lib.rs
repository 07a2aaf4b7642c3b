pub mod config;
pub mod error;
pub mod gemini;
pub mod http;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::RelayError;
pub use models::{AskRequest, AskResponse, GenerateContentRequest, GenerateContentResponse};
