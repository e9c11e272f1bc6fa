//! Request and response value objects.
//!
//! Both are ephemeral: a [`Request`] is built per user action and a
//! [`Response`] is displayed and discarded. Neither is ever stored.

use crate::image::ImageInput;
use serde::{Deserialize, Serialize};

/// The four gateway operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Conversational turn over the session history
    Chat,
    /// Instruction + image captioning
    Vision,
    /// Text embedding
    Embedding,
    /// Single prompt, no conversation context
    Completion,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Chat => "chat",
            RequestKind::Vision => "vision",
            RequestKind::Embedding => "embedding",
            RequestKind::Completion => "completion",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single outbound request (Value Object)
#[derive(Debug, Clone)]
pub struct Request {
    kind: RequestKind,
    text: String,
    image: Option<ImageInput>,
}

impl Request {
    /// A chat message; the session history travels separately
    pub fn chat(message: impl Into<String>) -> Self {
        Self::text_only(RequestKind::Chat, message)
    }

    pub fn vision(instruction: impl Into<String>, image: ImageInput) -> Self {
        Self {
            kind: RequestKind::Vision,
            text: instruction.into(),
            image: Some(image),
        }
    }

    pub fn embedding(text: impl Into<String>) -> Self {
        Self::text_only(RequestKind::Embedding, text)
    }

    pub fn completion(prompt: impl Into<String>) -> Self {
        Self::text_only(RequestKind::Completion, prompt)
    }

    fn text_only(kind: RequestKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            image: None,
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Prompt, message, or instruction text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageInput> {
        self.image.as_ref()
    }
}

/// A numeric embedding of a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Cosine similarity with another embedding of the same dimension
    ///
    /// Returns `None` for mismatched dimensions or zero vectors.
    pub fn cosine_similarity(&self, other: &Embedding) -> Option<f32> {
        if self.dimension() != other.dimension() || self.values.is_empty() {
            return None;
        }
        let dot: f32 = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum();
        let norm_a = self.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        let norm_b = other.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }
        Some(dot / (norm_a * norm_b))
    }
}

/// Result of a gateway call
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Vector(Embedding),
}

impl Response {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Text(s) => Some(s),
            Response::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Embedding> {
        match self {
            Response::Vector(e) => Some(e),
            Response::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Response::Text(s) => Some(s),
            Response::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Embedding> {
        match self {
            Response::Vector(e) => Some(e),
            Response::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageFormat;

    #[test]
    fn test_request_constructors() {
        assert_eq!(Request::chat("hi").kind(), RequestKind::Chat);
        assert_eq!(Request::completion("p").kind(), RequestKind::Completion);
        assert_eq!(Request::embedding("t").kind(), RequestKind::Embedding);

        let image = ImageInput::new(ImageFormat::Png, vec![1]);
        let request = Request::vision("describe", image);
        assert_eq!(request.kind(), RequestKind::Vision);
        assert_eq!(request.text(), "describe");
        assert!(request.image().is_some());
    }

    #[test]
    fn test_text_requests_carry_no_image() {
        assert!(Request::chat("hello").image().is_none());
    }

    #[test]
    fn test_cosine_similarity() {
        let a = Embedding::new(vec![1.0, 0.0]);
        let b = Embedding::new(vec![0.0, 1.0]);
        let c = Embedding::new(vec![2.0, 0.0]);
        assert_eq!(a.cosine_similarity(&b), Some(0.0));
        assert_eq!(a.cosine_similarity(&c), Some(1.0));
        assert_eq!(a.cosine_similarity(&Embedding::new(vec![1.0])), None);
        assert_eq!(a.cosine_similarity(&Embedding::new(vec![0.0, 0.0])), None);
    }

    #[test]
    fn test_response_accessors() {
        let text = Response::Text("ok".into());
        assert_eq!(text.as_text(), Some("ok"));
        assert!(text.as_vector().is_none());

        let vector = Response::Vector(Embedding::new(vec![0.5]));
        assert_eq!(vector.as_vector().map(Embedding::dimension), Some(1));
    }
}
