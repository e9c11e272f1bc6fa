//! Gemini connection settings from TOML (`[gemini]` section)

use crate::gemini::client::{DEFAULT_BASE_URL, GeminiConfig};
use crate::gemini::error::GeminiError;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when `api_key_env` is unset
pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable holding the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL of the REST API.
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Find the API key: explicit value, then `api_key_env`, then `GOOGLE_API_KEY`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_empty = |v: String| {
            let v = v.trim().to_string();
            (!v.is_empty()).then_some(v)
        };
        self.api_key
            .clone()
            .and_then(non_empty)
            .or_else(|| lookup(&self.api_key_env).and_then(non_empty))
            .or_else(|| lookup(FALLBACK_API_KEY_ENV).and_then(non_empty))
    }

    /// Build the client settings, failing when no key can be found
    pub fn to_client_config(&self) -> Result<GeminiConfig, GeminiError> {
        let api_key = self
            .resolve_api_key()
            .ok_or_else(|| GeminiError::MissingApiKey(self.api_key_env.clone()))?;
        Ok(GeminiConfig::new(api_key).with_base_url(self.base_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(env(&[("GEMINI_API_KEY", "from-env")]));
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_then_fallback() {
        let config = FileGeminiConfig::default();
        assert_eq!(
            config
                .resolve_api_key_with(env(&[("GEMINI_API_KEY", "primary")]))
                .as_deref(),
            Some("primary")
        );
        assert_eq!(
            config
                .resolve_api_key_with(env(&[("GOOGLE_API_KEY", "fallback")]))
                .as_deref(),
            Some("fallback")
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = FileGeminiConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        assert!(
            config
                .resolve_api_key_with(env(&[("GEMINI_API_KEY", "")]))
                .is_none()
        );
    }
}
