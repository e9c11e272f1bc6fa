//! Model Gateway port
//!
//! Defines the interface between IntelliApp and the hosted generative model.
//! Each operation is one request/response pair: no retry, no backoff, no
//! timeout. Failures propagate to the caller unchanged.

use async_trait::async_trait;
use intelli_domain::{Embedding, ImageInput, Request, RequestKind, Response, Turn};
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request blocked by the model: {0}")]
    Blocked(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Quota exhaustion (HTTP 429)
    pub fn is_quota(&self) -> bool {
        matches!(self, GatewayError::Api { status: 429, .. })
    }

    /// Authentication or permission failure
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Api { status: 401 | 403, .. })
    }
}

/// Gateway to the external generative model
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send the full conversation history and return the assistant's reply.
    ///
    /// The last turn of `history` is the new user message.
    async fn converse(&self, history: &[Turn]) -> Result<String, GatewayError>;

    /// Send an instruction together with an image and return descriptive text
    async fn caption(&self, instruction: &str, image: &ImageInput)
    -> Result<String, GatewayError>;

    /// Return the embedding of `text`
    async fn embed(&self, text: &str) -> Result<Embedding, GatewayError>;

    /// Send a single prompt with no conversation context
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Run a [`Request`] through the matching operation.
    ///
    /// `prior` is the conversation so far and is only read for chat requests.
    async fn execute(&self, request: &Request, prior: &[Turn]) -> Result<Response, GatewayError> {
        match request.kind() {
            RequestKind::Chat => {
                let mut history = prior.to_vec();
                history.push(Turn::user(request.text()));
                self.converse(&history).await.map(Response::Text)
            }
            RequestKind::Vision => {
                let image = request.image().ok_or_else(|| {
                    GatewayError::Configuration("vision request without an image".to_string())
                })?;
                self.caption(request.text(), image).await.map(Response::Text)
            }
            RequestKind::Embedding => self.embed(request.text()).await.map(Response::Vector),
            RequestKind::Completion => self.complete(request.text()).await.map(Response::Text),
        }
    }
}
