//! reqwest implementation of [`BackendGateway`].

use super::protocol::{
    CreateSessionRequest, LOGIN_PATH, LoginRequest, SESSIONS_PATH, interpret_create_session,
    interpret_login,
};
use async_trait::async_trait;
use relay_application::{AuthError, BackendError, BackendGateway, NewSession};
use relay_domain::{Credential, LoginCredentials, SessionHandle};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Backend adapter talking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: Client,
    base_url: String,
}

impl HttpBackendGateway {
    /// Create a gateway for `base_url`; every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn login_request(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Request, reqwest::Error> {
        self.client
            .post(self.endpoint(LOGIN_PATH))
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .build()
    }

    pub(crate) fn create_session_request(
        &self,
        credential: &Credential,
        session: &NewSession,
    ) -> Result<Request, reqwest::Error> {
        self.client
            .post(self.endpoint(SESSIONS_PATH))
            .header(AUTHORIZATION, credential.authorization_header())
            .json(&CreateSessionRequest {
                message: &session.message,
                date: &session.date,
            })
            .build()
    }
}

async fn read_body(response: Response) -> Result<(StatusCode, String), reqwest::Error> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn auth_transport_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Timeout
    } else {
        AuthError::Transport(err.to_string())
    }
}

fn backend_transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Transport(err.to_string())
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Credential, AuthError> {
        let request = self.login_request(credentials).map_err(auth_transport_error)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(auth_transport_error)?;

        let (status, body) = read_body(response).await.map_err(auth_transport_error)?;
        debug!(status = status.as_u16(), "Backend login responded");
        interpret_login(status, &body)
    }

    async fn create_session(
        &self,
        credential: &Credential,
        session: &NewSession,
    ) -> Result<SessionHandle, BackendError> {
        let request = self
            .create_session_request(credential, session)
            .map_err(backend_transport_error)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(backend_transport_error)?;

        let (status, body) = read_body(response)
            .await
            .map_err(backend_transport_error)?;
        debug!(status = status.as_u16(), "Backend session creation responded");
        interpret_create_session(status, &body)
    }
}
