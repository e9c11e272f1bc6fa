//! Presentation layer for IntelliApp
//!
//! This crate contains CLI definitions, the interactive menu REPL, output
//! formatting, and the busy spinner.

pub mod cli;
pub mod config;
pub mod help;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::BusySpinner;
pub use repl::MenuRepl;
