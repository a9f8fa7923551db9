//! Backend auth/session API adapter
//!
//! Implements BackendGateway over HTTP.

pub mod gateway;
pub mod protocol;
