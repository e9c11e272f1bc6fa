//! Prompt construction and response post-processing.

pub mod code_fence;
pub mod template;
