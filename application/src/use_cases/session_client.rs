//! Session client
//!
//! Owns the backend credential and creates backend session records with it.

use crate::ports::backend_gateway::{AuthError, BackendError, BackendGateway, NewSession};
use chrono::{DateTime, Utc};
use relay_domain::{Credential, LoginCredentials, SessionHandle, format_session_timestamp};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Errors from creating a backend session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Client for the backend auth/session API
///
/// The credential is written only by [`login`](Self::login) and read by every
/// later backend call. Calls made without one fail with
/// [`AuthError::NotAuthenticated`] instead of going out unauthenticated.
pub struct SessionClient<B: BackendGateway + 'static> {
    gateway: Arc<B>,
    credential: RwLock<Option<Credential>>,
}

impl<B: BackendGateway + 'static> SessionClient<B> {
    pub fn new(gateway: Arc<B>) -> Self {
        Self {
            gateway,
            credential: RwLock::new(None),
        }
    }

    /// Log in and keep the returned credential for later calls
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Credential, AuthError> {
        match self.gateway.login(credentials).await {
            Ok(credential) => {
                *self.credential.write().await = Some(credential.clone());
                info!(email = %credentials.email, "Logged into backend");
                Ok(credential)
            }
            Err(e) => {
                error!(email = %credentials.email, "Backend login failed: {}", e);
                Err(e)
            }
        }
    }

    /// The active credential, if login succeeded
    pub async fn credential(&self) -> Option<Credential> {
        self.credential.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.credential.read().await.is_some()
    }

    /// Create a backend session titled by the first user message
    pub async fn create_session(
        &self,
        first_user_message: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<SessionHandle, SessionError> {
        let credential = self
            .credential()
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        let request = NewSession {
            message: first_user_message.to_string(),
            date: format_session_timestamp(timestamp),
        };

        let handle = self.gateway.create_session(&credential, &request).await?;
        info!(session_id = %handle, "Created backend session");
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use chrono::TimeZone;

    fn login() -> LoginCredentials {
        LoginCredentials::new("bot@example.com", "secret")
    }

    #[tokio::test]
    async fn test_login_stores_credential() {
        let backend = Arc::new(MockBackend::logging_in_as("abc"));
        let client = SessionClient::new(backend);

        let credential = client.login(&login()).await.unwrap();

        assert_eq!(credential.token(), "abc");
        assert_eq!(client.credential().await, Some(Credential::new("abc")));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_credential_unset() {
        let backend = Arc::new(MockBackend::rejecting_login(401, "bad password"));
        let client = SessionClient::new(backend);

        let err = client.login(&login()).await.unwrap_err();

        assert!(err.is_rejection());
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_create_session_without_login_fails_as_auth_error() {
        let backend = Arc::new(MockBackend::rejecting_login(401, "bad password"));
        let client = SessionClient::new(backend.clone());
        let _ = client.login(&login()).await;

        let err = client.create_session("hi", Utc::now()).await.unwrap_err();

        assert_eq!(err, SessionError::Auth(AuthError::NotAuthenticated));
        assert!(backend.session_calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_calls_carry_bearer_token() {
        let backend = Arc::new(MockBackend::logging_in_as("abc"));
        backend.push_session(Ok(SessionHandle::new("s-1")));
        backend.push_session(Ok(SessionHandle::new("s-2")));
        let client = SessionClient::new(backend.clone());
        client.login(&login()).await.unwrap();

        client.create_session("one", Utc::now()).await.unwrap();
        client.create_session("two", Utc::now()).await.unwrap();

        let calls = backend.session_calls();
        assert_eq!(calls.len(), 2);
        assert!(
            calls
                .iter()
                .all(|(credential, _)| credential.authorization_header() == "Bearer abc")
        );
    }

    #[tokio::test]
    async fn test_create_session_sends_message_and_formatted_date() {
        let backend = Arc::new(MockBackend::logging_in_as("abc"));
        backend.push_session(Ok(SessionHandle::new("s-1")));
        let client = SessionClient::new(backend.clone());
        client.login(&login()).await.unwrap();

        let at = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        let handle = client.create_session("hi", at).await.unwrap();

        assert_eq!(handle.as_str(), "s-1");
        let (_, request) = &backend.session_calls()[0];
        assert_eq!(request.message, "hi");
        assert_eq!(request.date, "2023-05-01T12:00:00.123Z");
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let backend = Arc::new(MockBackend::logging_in_as("abc"));
        backend.push_session(Err(BackendError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        let client = SessionClient::new(backend);
        client.login(&login()).await.unwrap();

        let err = client.create_session("hi", Utc::now()).await.unwrap_err();

        assert!(matches!(err, SessionError::Backend(BackendError::Status { status: 500, .. })));
    }
}
