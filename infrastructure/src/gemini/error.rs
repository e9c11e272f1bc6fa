//! Error types for the Gemini adapter

use intelli_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,

    #[error("No API key found: set {0} or gemini.api_key in the config file")]
    MissingApiKey(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) => GatewayError::Connection(e.to_string()),
            GeminiError::Api { status, message } => GatewayError::Api { status, message },
            GeminiError::Parse { error, .. } => GatewayError::InvalidResponse(error),
            GeminiError::Blocked(reason) => GatewayError::Blocked(reason),
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
            e @ GeminiError::MissingApiKey(_) => GatewayError::Configuration(e.to_string()),
        }
    }
}
