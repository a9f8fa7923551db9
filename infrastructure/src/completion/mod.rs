//! Chat completions adapter
//!
//! Implements CompletionGateway for OpenAI-compatible providers.

pub mod gateway;
pub mod protocol;
