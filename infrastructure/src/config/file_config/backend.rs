//! `[backend]` section

use relay_domain::LoginCredentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend auth/session API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL, e.g. `http://localhost:5000`
    pub url: String,
    /// Bot account email
    pub email: String,
    /// Bot account password
    pub password: String,
    /// Timeout for each backend request
    pub timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000".to_string(),
            email: String::new(),
            password: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl FileBackendConfig {
    pub fn login_credentials(&self) -> LoginCredentials {
        LoginCredentials::new(self.email.clone(), self.password.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
