//! Presentation layer for chat-relay
//!
//! This crate contains the HTTP surface (router, handlers, error mapping)
//! and the command-line definitions of the server binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::auth::API_KEY_HEADER;
pub use http::error::{ApiError, ApiResult};
pub use http::routes::create_router;
pub use http::state::AppState;
