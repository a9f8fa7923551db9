//! Test doubles for the application ports.

use crate::ports::backend_gateway::{AuthError, BackendError, BackendGateway, NewSession};
use crate::ports::completion_gateway::{CompletionError, CompletionGateway};
use async_trait::async_trait;
use relay_domain::{Credential, LoginCredentials, Message, SessionHandle};
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) struct MockBackend {
    login: Result<Credential, AuthError>,
    sessions: Mutex<VecDeque<Result<SessionHandle, BackendError>>>,
    session_calls: Mutex<Vec<(Credential, NewSession)>>,
}

impl MockBackend {
    pub(crate) fn logging_in_as(token: &str) -> Self {
        Self {
            login: Ok(Credential::new(token)),
            sessions: Mutex::new(VecDeque::new()),
            session_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn rejecting_login(status: u16, body: &str) -> Self {
        Self {
            login: Err(AuthError::Rejected {
                status,
                body: body.to_string(),
            }),
            sessions: Mutex::new(VecDeque::new()),
            session_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_session(&self, result: Result<SessionHandle, BackendError>) {
        self.sessions.lock().unwrap().push_back(result);
    }

    pub(crate) fn session_calls(&self) -> Vec<(Credential, NewSession)> {
        self.session_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendGateway for MockBackend {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<Credential, AuthError> {
        self.login.clone()
    }

    async fn create_session(
        &self,
        credential: &Credential,
        session: &NewSession,
    ) -> Result<SessionHandle, BackendError> {
        self.session_calls
            .lock()
            .unwrap()
            .push((credential.clone(), session.clone()));
        self.sessions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("no scripted response".to_string())))
    }
}

pub(crate) struct MockCompletion {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockCompletion {
    pub(crate) fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub(crate) fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for MockCompletion {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }
}
