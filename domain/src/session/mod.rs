//! Backend session domain.
//!
//! - [`entities::Credential`]: bearer token obtained by logging in
//! - [`entities::SessionHandle`]: identifier of the backend session record
//! - [`bootstrap::SessionBootstrap`]: single-attempt session creation state
//! - [`timestamp`]: the timestamp format the backend expects

pub mod bootstrap;
pub mod entities;
pub mod timestamp;
