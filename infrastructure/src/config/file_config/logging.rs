//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostics to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Write a JSONL transcript of requests and responses
    pub conversation_log: Option<PathBuf>,
}
