//! Session domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Chat history for one interactive session (Entity)
///
/// Turns are only ever appended, and always as a user/assistant pair, so the
/// history alternates strictly and holds two turns per exchange.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: String,
    started_at: DateTime<Utc>,
    turns: Vec<Turn>,
}

impl ConversationSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Create a session with an id derived from the current time
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            id: format!("chat-{}", now.format("%Y%m%dT%H%M%S%.3fZ")),
            started_at: now,
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of completed user/assistant exchanges
    pub fn exchange_count(&self) -> usize {
        self.turns.len() / 2
    }

    /// The history as it should be sent for a new user message
    pub fn history_with(&self, message: &str) -> Vec<Turn> {
        let mut history = Vec::with_capacity(self.turns.len() + 1);
        history.extend_from_slice(&self.turns);
        history.push(Turn::user(message));
        history
    }

    /// Append a completed exchange
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.turns.push(Turn::user(user));
        self.turns.push(Turn::assistant(assistant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = ConversationSession::new("s1");
        assert_eq!(session.id(), "s1");
        assert!(session.is_empty());
        assert_eq!(session.exchange_count(), 0);
    }

    #[test]
    fn test_start_generates_id() {
        let session = ConversationSession::start();
        assert!(session.id().starts_with("chat-"));
    }

    #[test]
    fn test_history_alternates_after_exchanges() {
        let mut session = ConversationSession::new("s1");
        for i in 0..5 {
            session.record_exchange(format!("q{i}"), format!("a{i}"));
        }

        assert_eq!(session.len(), 10);
        assert_eq!(session.exchange_count(), 5);
        for (i, turn) in session.turns().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected);
        }
        assert_eq!(session.turns()[8].text, "q4");
        assert_eq!(session.turns()[9].text, "a4");
    }

    #[test]
    fn test_history_with_does_not_mutate() {
        let mut session = ConversationSession::new("s1");
        session.record_exchange("hello", "hi there");

        let history = session.history_with("how are you?");
        assert_eq!(history.len(), 3);
        assert_eq!(history[2], Turn::user("how are you?"));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
