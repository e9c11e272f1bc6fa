//! Gemini implementation of the model gateway

use super::client::GeminiClient;
use super::protocol::{EmbedContentRequest, GenerateContentRequest};
use async_trait::async_trait;
use intelli_application::{GatewayError, ModelGateway};
use intelli_domain::{Embedding, ImageInput, ModelSelection, Turn};
use tracing::debug;

/// [`ModelGateway`] backed by the Gemini REST API
pub struct GeminiModelGateway {
    client: GeminiClient,
    models: ModelSelection,
}

impl GeminiModelGateway {
    pub fn new(client: GeminiClient, models: ModelSelection) -> Self {
        Self { client, models }
    }

    pub fn models(&self) -> &ModelSelection {
        &self.models
    }
}

#[async_trait]
impl ModelGateway for GeminiModelGateway {
    async fn converse(&self, history: &[Turn]) -> Result<String, GatewayError> {
        debug!(model = %self.models.chat, turns = history.len(), "converse");
        let request = GenerateContentRequest::from_history(history);
        let response = self
            .client
            .generate_content(&self.models.chat, &request)
            .await?;
        Ok(response.text()?)
    }

    async fn caption(
        &self,
        instruction: &str,
        image: &ImageInput,
    ) -> Result<String, GatewayError> {
        debug!(model = %self.models.vision, bytes = image.len(), "caption");
        let request = GenerateContentRequest::with_image(instruction, image);
        let response = self
            .client
            .generate_content(&self.models.vision, &request)
            .await?;
        Ok(response.text()?)
    }

    async fn embed(&self, text: &str) -> Result<Embedding, GatewayError> {
        debug!(model = %self.models.embedding, "embed");
        let request = EmbedContentRequest::new(self.models.embedding.resource_name(), text);
        let response = self
            .client
            .embed_content(&self.models.embedding, &request)
            .await?;
        if response.embedding.values.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(Embedding::new(response.embedding.values))
    }

    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!(model = %self.models.chat, "complete");
        let request = GenerateContentRequest::prompt(prompt);
        let response = self
            .client
            .generate_content(&self.models.chat, &request)
            .await?;
        Ok(response.text()?)
    }
}
