//! Backend Gateway port
//!
//! Defines the interface for the backend's auth and session API.

use async_trait::async_trait;
use relay_domain::{Credential, LoginCredentials, SessionHandle};
use thiserror::Error;

/// Errors from logging into the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Login response did not contain a token")]
    MissingToken,

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Backend timed out")]
    Timeout,

    #[error("Not logged into the backend")]
    NotAuthenticated,
}

impl AuthError {
    /// Whether the backend answered and refused the credentials
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected { .. } | AuthError::MissingToken)
    }
}

/// Errors from backend calls made after login
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Backend timed out")]
    Timeout,

    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

/// Body of a session-creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    /// First user message of the conversation
    pub message: String,
    /// Creation time, already in the backend's timestamp format
    pub date: String,
}

/// Gateway for the backend auth/session API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Exchange an email/password pair for a bearer credential
    async fn login(&self, credentials: &LoginCredentials) -> Result<Credential, AuthError>;

    /// Create a session record, authorized by `credential`
    async fn create_session(
        &self,
        credential: &Credential,
        session: &NewSession,
    ) -> Result<SessionHandle, BackendError>;
}
