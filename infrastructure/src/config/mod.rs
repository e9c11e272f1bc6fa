//! Configuration file loading for IntelliApp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTELLIAPP_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./intelliapp.toml` or `./.intelliapp.toml`
//! 4. Global: `$XDG_CONFIG_HOME/intelliapp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FALLBACK_API_KEY_ENV, FileConfig, FileGeminiConfig, FileLimitsConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
