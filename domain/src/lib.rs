//! Domain layer for IntelliApp
//!
//! This crate contains the panels, conversation session, request/response
//! value objects, and prompt construction. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panels
//!
//! IntelliApp exposes eight [`Panel`]s. Every panel except Help is bound to
//! exactly one [`RequestKind`] of the model gateway:
//!
//! - **Chat**: multi-turn conversation over a [`ConversationSession`]
//! - **Vision**: image + instruction captioning
//! - **Embedding**: text to vector
//! - **Completion**: single-shot prompt with no conversation context
//!
//! ## Conversation
//!
//! A [`ConversationSession`] is append-only: turns are recorded in
//! user/assistant pairs and never edited or removed.

pub mod config;
pub mod core;
pub mod image;
pub mod panel;
pub mod prompt;
pub mod request;
pub mod session;

// Re-export commonly used types
pub use config::{
    limits::InputLimits,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    error::DomainError,
    model::{Model, ModelSelection},
    string::truncate_str,
};
pub use image::{ImageFormat, ImageInput};
pub use panel::{Panel, language::Language};
pub use prompt::{code_fence::strip_code_fences, template::PromptTemplate};
pub use request::{Embedding, Request, RequestKind, Response};
pub use session::entities::{ConversationSession, Role, Turn};
