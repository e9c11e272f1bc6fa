//! HTTP client for the Gemini REST API

use super::error::{GeminiError, Result};
use super::protocol::{
    ApiErrorEnvelope, EmbedContentRequest, EmbedContentResponse, GenerateContentRequest,
    GenerateContentResponse,
};
use intelli_domain::{Model, truncate_str};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default endpoint of the public Gemini API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Thin JSON-over-HTTP client; one POST per call, no retries
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("IntelliApp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `POST /v1beta/models/{model}:generateContent`
    pub async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.post(self.method_url(model, "generateContent"), request)
            .await
    }

    /// `POST /v1beta/models/{model}:embedContent`
    pub async fn embed_content(
        &self,
        model: &Model,
        request: &EmbedContentRequest,
    ) -> Result<EmbedContentResponse> {
        self.post(self.method_url(model, "embedContent"), request)
            .await
    }

    fn method_url(&self, model: &Model, method: &str) -> String {
        format!(
            "{}/{}/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            API_VERSION,
            model.resource_name(),
            method
        )
    }

    async fn post<Req, Resp>(&self, url: String, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!("{} returned {} ({} bytes)", url, status.as_u16(), raw.len());

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorEnvelope>(&raw) {
                Ok(envelope) => envelope.error.message,
                Err(_) => truncate_str(raw.trim(), 500).to_string(),
            };
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&raw).map_err(|e| GeminiError::Parse {
            error: e.to_string(),
            raw: truncate_str(&raw, 500).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let client =
            GeminiClient::new(GeminiConfig::new("key").with_base_url("http://localhost:8080/"))
                .unwrap();
        assert_eq!(
            client.method_url(&Model::Gemini15Flash, "generateContent"),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_default_base_url() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
