//! Conversation session domain.
//!
//! - [`entities::ConversationSession`] — the append-only chat history
//! - [`entities::Turn`] — a single message within a session

pub mod entities;
