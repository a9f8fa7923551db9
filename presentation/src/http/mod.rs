//! HTTP surface
//!
//! - `GET /`: liveness acknowledgement
//! - `POST /api/send-user-message`: relay a message, answer `{reply}`
//!
//! Routes under `/api` require the `x-api-key` header when a key is configured.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
