//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Conversion to domain types
//! reports problems as [`ConfigIssue`]s rather than failing.

mod gemini;
mod limits;
mod logging;
mod models;
mod output;
mod repl;

pub use gemini::{FALLBACK_API_KEY_ENV, FileGeminiConfig};
pub use limits::FileLimitsConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use intelli_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini connection settings
    pub gemini: FileGeminiConfig,
    /// Model per gateway operation
    pub models: FileModelsConfig,
    /// Optional input size limits
    pub limits: FileLimitsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// The API key is not checked here: it usually comes from the
    /// environment and is resolved when the gateway is built.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.to_selection().1);
        issues.extend(self.limits.to_limits().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelli_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "MY_GEMINI_KEY"
base_url = "http://localhost:9000"

[models]
chat = "gemini-1.5-pro"
embedding = "text-embedding-004"

[limits]
max_text_chars = 20000

[output]
color = false

[repl]
show_progress = false
history_file = "~/.local/share/intelliapp/history.txt"

[logging]
conversation_log = "/tmp/intelliapp.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.base_url, "http://localhost:9000");
        assert_eq!(config.models.to_selection().0.chat, Model::Gemini15Pro);
        assert_eq!(config.limits.max_text_chars, Some(20000));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.logging.conversation_log.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
vision = "gemini-1.5-pro"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.to_selection().0.vision, Model::Gemini15Pro);
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.limits.max_image_bytes.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[models]
chat = ""

[limits]
max_image_bytes = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 2);
    }
}
