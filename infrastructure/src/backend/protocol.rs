//! Wire types for the backend auth/session API.

use relay_application::{AuthError, BackendError};
use relay_domain::{Credential, SessionHandle};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/login";
pub const SESSIONS_PATH: &str = "/api/chatbot-sessions";

/// `POST /api/login` body
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /api/login` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt_token: Option<String>,
}

/// `POST /api/chatbot-sessions` body
#[derive(Debug, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub message: &'a str,
    pub date: &'a str,
}

/// `POST /api/chatbot-sessions` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Turn a login response into a credential. Only 200 counts as success.
pub fn interpret_login(status: StatusCode, body: &str) -> Result<Credential, AuthError> {
    if status != StatusCode::OK {
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let parsed: LoginResponse =
        serde_json::from_str(body).map_err(|_| AuthError::MissingToken)?;
    parsed
        .jwt_token
        .filter(|token| !token.is_empty())
        .map(Credential::new)
        .ok_or(AuthError::MissingToken)
}

/// Turn a session-creation response into a handle. 200 and 201 both count.
pub fn interpret_create_session(
    status: StatusCode,
    body: &str,
) -> Result<SessionHandle, BackendError> {
    if status != StatusCode::OK && status != StatusCode::CREATED {
        return Err(BackendError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let parsed: CreateSessionResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;
    parsed
        .session_id
        .filter(|id| !id.is_empty())
        .map(SessionHandle::new)
        .ok_or_else(|| BackendError::Malformed(format!("no sessionId in {body}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_ok() {
        let credential = interpret_login(StatusCode::OK, r#"{"jwtToken":"abc"}"#).unwrap();
        assert_eq!(credential.authorization_header(), "Bearer abc");
    }

    #[test]
    fn test_login_rejected_keeps_status_and_body() {
        let err =
            interpret_login(StatusCode::UNAUTHORIZED, "Invalid email or password").unwrap_err();
        assert_eq!(
            err,
            AuthError::Rejected {
                status: 401,
                body: "Invalid email or password".to_string()
            }
        );
    }

    #[test]
    fn test_login_201_is_not_success() {
        let err = interpret_login(StatusCode::CREATED, r#"{"jwtToken":"abc"}"#).unwrap_err();
        assert!(matches!(err, AuthError::Rejected { status: 201, .. }));
    }

    #[test]
    fn test_login_without_token() {
        assert_eq!(
            interpret_login(StatusCode::OK, r#"{"token":"abc"}"#).unwrap_err(),
            AuthError::MissingToken
        );
        assert_eq!(
            interpret_login(StatusCode::OK, "not json").unwrap_err(),
            AuthError::MissingToken
        );
    }

    #[test]
    fn test_create_session_accepts_200_and_201() {
        for status in [StatusCode::OK, StatusCode::CREATED] {
            let handle = interpret_create_session(status, r#"{"sessionId":"s-1"}"#).unwrap();
            assert_eq!(handle.as_str(), "s-1");
        }
    }

    #[test]
    fn test_create_session_other_status() {
        let err = interpret_create_session(StatusCode::FORBIDDEN, "nope").unwrap_err();
        assert_eq!(
            err,
            BackendError::Status {
                status: 403,
                body: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_create_session_missing_id() {
        let err = interpret_create_session(StatusCode::CREATED, "{}").unwrap_err();
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn test_request_bodies_use_backend_field_names() {
        let login = serde_json::to_value(LoginRequest {
            email: "bot@example.com",
            password: "pw",
        })
        .unwrap();
        assert_eq!(
            login,
            serde_json::json!({"email": "bot@example.com", "password": "pw"})
        );

        let session = serde_json::to_value(CreateSessionRequest {
            message: "hi",
            date: "2024-01-01T00:00:00.000Z",
        })
        .unwrap();
        assert_eq!(
            session,
            serde_json::json!({"message": "hi", "date": "2024-01-01T00:00:00.000Z"})
        );
    }
}
