//! Model value object representing a Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gemini models addressed by the gateway (Value Object)
///
/// Generative models serve chat, completion, and vision requests;
/// embedding models serve embedding requests only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Generative models
    Gemini15Flash,
    Gemini15Pro,
    GeminiPro,
    GeminiProVision,
    // Embedding models
    Embedding001,
    TextEmbedding004,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model (without the `models/` prefix)
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::GeminiPro => "gemini-pro",
            Model::GeminiProVision => "gemini-pro-vision",
            Model::Embedding001 => "embedding-001",
            Model::TextEmbedding004 => "text-embedding-004",
            Model::Custom(s) => s,
        }
    }

    /// Resource name as used in REST payloads, e.g. `models/embedding-001`
    pub fn resource_name(&self) -> String {
        format!("models/{}", self.as_str())
    }

    /// Check if this is an embedding model
    pub fn is_embedding(&self) -> bool {
        match self {
            Model::Embedding001 | Model::TextEmbedding004 => true,
            Model::Custom(s) => s.contains("embedding"),
            _ => false,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("models/").unwrap_or(s);
        Ok(match s {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-pro" => Model::GeminiPro,
            "gemini-pro-vision" => Model::GeminiProVision,
            "embedding-001" => Model::Embedding001,
            "text-embedding-004" => Model::TextEmbedding004,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

/// Which model serves which gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    /// Conversational turns and single-shot completions
    pub chat: Model,
    /// Image captioning
    pub vision: Model,
    /// Text embeddings
    pub embedding: Model,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            chat: Model::Gemini15Flash,
            vision: Model::Gemini15Flash,
            embedding: Model::Embedding001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_parses() {
        let model: Model = "gemini-1.5-pro".parse().unwrap();
        assert_eq!(model, Model::Gemini15Pro);
    }

    #[test]
    fn test_resource_prefix_is_accepted() {
        let model: Model = "models/embedding-001".parse().unwrap();
        assert_eq!(model, Model::Embedding001);
        assert_eq!(model.resource_name(), "models/embedding-001");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-2.0-flash".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-2.0-flash".to_string()));
        assert_eq!(model.to_string(), "gemini-2.0-flash");
        assert!(!model.is_embedding());
    }

    #[test]
    fn test_embedding_detection() {
        assert!(Model::Embedding001.is_embedding());
        assert!(Model::Custom("gemini-embedding-exp".into()).is_embedding());
        assert!(!Model::Gemini15Flash.is_embedding());
    }

    #[test]
    fn test_default_selection() {
        let selection = ModelSelection::default();
        assert_eq!(selection.chat, Model::Gemini15Flash);
        assert_eq!(selection.embedding, Model::Embedding001);
    }

    #[test]
    fn test_deserialize_from_string() {
        let model: Model = serde_json::from_str("\"gemini-pro\"").unwrap();
        assert_eq!(model, Model::GeminiPro);
    }
}
