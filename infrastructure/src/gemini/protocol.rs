//! Gemini REST payloads
//!
//! Request bodies for `generateContent` and `embedContent`, and the subset
//! of their responses IntelliApp reads. Field names follow the public REST
//! reference: requests may use snake_case, responses arrive in camelCase.

use super::error::{GeminiError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use intelli_domain::{ImageInput, Role, Turn};
use serde::{Deserialize, Serialize};

/// Wire role of the model side of a conversation
pub const MODEL_ROLE: &str = "model";
/// Wire role of the user side of a conversation
pub const USER_ROLE: &str = "user";

/// Task hint sent with embedding requests
pub const EMBEDDING_TASK_TYPE: &str = "RETRIEVAL_DOCUMENT";

// ==================== Requests ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &ImageInput) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type().to_string(),
                data: STANDARD.encode(image.bytes()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some(USER_ROLE.to_string()),
            parts,
        }
    }

    /// Convert a conversation turn, mapping the assistant to the `model` role
    pub fn from_turn(turn: &Turn) -> Self {
        let role = match turn.role {
            Role::User => USER_ROLE,
            Role::Assistant => MODEL_ROLE,
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(turn.text.clone())],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Multi-turn request from a conversation history
    pub fn from_history(history: &[Turn]) -> Self {
        Self {
            contents: history.iter().map(Content::from_turn).collect(),
        }
    }

    /// Single user prompt with no prior context
    pub fn prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content::user(vec![Part::text(prompt)])],
        }
    }

    /// Instruction followed by an inline image
    pub fn with_image(instruction: &str, image: &ImageInput) -> Self {
        Self {
            contents: vec![Content::user(vec![
                Part::text(instruction),
                Part::image(image),
            ])],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedContentRequest {
    /// Resource name, e.g. `models/embedding-001`
    pub model: String,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

impl EmbedContentRequest {
    pub fn new(model: impl Into<String>, text: &str) -> Self {
        Self {
            model: model.into(),
            content: Content {
                role: None,
                parts: vec![Part::text(text)],
            },
            task_type: Some(EMBEDDING_TASK_TYPE.to_string()),
        }
    }
}

// ==================== Responses ====================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// A prompt rejected by safety filters has no candidates and a
    /// `blockReason`; a candidate stopped for safety has no parts.
    pub fn text(&self) -> Result<String> {
        let Some(candidate) = self.candidates.first() else {
            return match self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
            {
                Some(reason) => Err(GeminiError::Blocked(reason)),
                None => Err(GeminiError::EmptyResponse),
            };
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return match candidate.finish_reason.as_deref() {
                Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                    Err(GeminiError::Blocked(reason.to_string()))
                }
                _ => Err(GeminiError::EmptyResponse),
            };
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentEmbedding {
    #[serde(default)]
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// `{"error": {...}}` body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}
