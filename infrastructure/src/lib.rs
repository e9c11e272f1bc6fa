//! Infrastructure layer for IntelliApp
//!
//! Adapters that implement the ports defined in the application layer:
//! the Gemini model gateway, the JSONL transcript logger, plus configuration
//! file loading and image file reading.

pub mod config;
pub mod gemini;
pub mod image;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGeminiConfig, FileLimitsConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileReplConfig,
};
pub use gemini::{
    client::{GeminiClient, GeminiConfig},
    error::{GeminiError, Result},
    gateway::GeminiModelGateway,
};
pub use image::{FsImageSource, load_image};
pub use logging::JsonlConversationLogger;
