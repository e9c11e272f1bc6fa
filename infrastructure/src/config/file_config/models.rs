//! Model selection from TOML (`[models]` section)

use intelli_domain::{ConfigIssue, ConfigIssueCode, Model, ModelSelection};
use serde::{Deserialize, Serialize};

/// Per-operation model names
///
/// # Example
///
/// ```toml
/// [models]
/// chat = "gemini-1.5-pro"          # ChatBot and the completion panels
/// vision = "gemini-1.5-flash"      # Image Captioning
/// embedding = "text-embedding-004" # Embed Text
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub chat: Option<String>,
    pub vision: Option<String>,
    pub embedding: Option<String>,
}

impl FileModelsConfig {
    /// Parse one model field; empty names are reported and ignored.
    fn parse_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => {
                let Ok(model) = s.parse::<Model>();
                (Some(model), Vec::new())
            }
        }
    }

    /// Resolve the configured models over the defaults.
    pub fn to_selection(&self) -> (ModelSelection, Vec<ConfigIssue>) {
        let mut selection = ModelSelection::default();
        let mut issues = Vec::new();

        let (chat, chat_issues) = Self::parse_model("chat", self.chat.as_ref());
        let (vision, vision_issues) = Self::parse_model("vision", self.vision.as_ref());
        let (embedding, embedding_issues) =
            Self::parse_model("embedding", self.embedding.as_ref());
        issues.extend(chat_issues);
        issues.extend(vision_issues);
        issues.extend(embedding_issues);

        if let Some(model) = chat {
            selection.chat = model;
        }
        if let Some(model) = vision {
            selection.vision = model;
        }
        if let Some(model) = embedding {
            selection.embedding = model;
        }

        for (field, model, want_embedding) in [
            ("chat", &selection.chat, false),
            ("vision", &selection.vision, false),
            ("embedding", &selection.embedding, true),
        ] {
            if model.is_embedding() != want_embedding {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ModelRoleMismatch {
                        field: field.to_string(),
                        model: model.to_string(),
                    },
                    format!(
                        "models.{}: '{}' does not look like {} model",
                        field,
                        model,
                        if want_embedding {
                            "an embedding"
                        } else {
                            "a generative"
                        }
                    ),
                ));
            }
        }

        (selection, issues)
    }
}
