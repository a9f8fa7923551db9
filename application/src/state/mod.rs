//! Process-lifetime application state.

pub mod conversation_store;
