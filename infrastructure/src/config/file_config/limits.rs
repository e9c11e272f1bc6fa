//! Input limits from TOML (`[limits]` section)

use intelli_domain::{ConfigIssue, ConfigIssueCode, InputLimits};
use serde::{Deserialize, Serialize};

/// Unset fields mean "no limit".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLimitsConfig {
    pub max_text_chars: Option<usize>,
    pub max_image_bytes: Option<usize>,
}

impl FileLimitsConfig {
    /// Convert to domain limits. A zero limit would refuse every input, so
    /// it is reported and treated as unset.
    pub fn to_limits(&self) -> (InputLimits, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut check = |field: &str, value: Option<usize>| match value {
            Some(0) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroLimit {
                        field: field.to_string(),
                    },
                    format!("limits.{}: 0 would reject every input, ignoring", field),
                ));
                None
            }
            other => other,
        };

        let limits = InputLimits {
            max_text_chars: check("max_text_chars", self.max_text_chars),
            max_image_bytes: check("max_image_bytes", self.max_image_bytes),
        };
        (limits, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_unlimited() {
        let (limits, issues) = FileLimitsConfig::default().to_limits();
        assert_eq!(limits, InputLimits::unlimited());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_zero_is_ignored_with_warning() {
        let config = FileLimitsConfig {
            max_text_chars: Some(0),
            max_image_bytes: Some(4 * 1024 * 1024),
        };
        let (limits, issues) = config.to_limits();
        assert_eq!(limits.max_text_chars, None);
        assert_eq!(limits.max_image_bytes, Some(4 * 1024 * 1024));
        assert_eq!(issues.len(), 1);
    }
}
