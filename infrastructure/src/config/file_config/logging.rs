//! `[logging]` section

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file
    pub file: Option<String>,
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    pub level: Option<String>,
}
