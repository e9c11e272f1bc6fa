//! Interactive session lifecycle.
//!
//! An [`AppSession`] spans one run of the interactive front-end. It is
//! opened with [`AppSession::start`], borrowed mutably by every dispatch, and
//! closed with [`AppSession::end`], which drops the conversation. Nothing
//! survives the session.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use intelli_domain::ConversationSession;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// State owned by one interactive session
pub struct AppSession {
    id: String,
    started: Instant,
    conversation: Option<ConversationSession>,
    logger: Arc<dyn ConversationLogger>,
}

/// What is reported when a session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: String,
    pub exchanges: usize,
    pub duration: Duration,
}

impl AppSession {
    /// Open a new session
    pub fn start() -> Self {
        Self::start_with_logger(Arc::new(NoConversationLogger))
    }

    /// Open a new session that records its boundaries to `logger`
    pub fn start_with_logger(logger: Arc<dyn ConversationLogger>) -> Self {
        let id = format!("session-{}", std::process::id());
        info!(session = %id, "Session started");
        logger.log(ConversationEvent::session_start(&id));
        Self {
            id,
            started: Instant::now(),
            conversation: None,
            logger,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The chat conversation, if the ChatBot panel has been used
    pub fn conversation(&self) -> Option<&ConversationSession> {
        self.conversation.as_ref()
    }

    /// The chat conversation, created on first use
    pub fn conversation_mut(&mut self) -> &mut ConversationSession {
        self.conversation.get_or_insert_with(|| {
            let conversation = ConversationSession::start();
            debug!(conversation = %conversation.id(), "Conversation created");
            conversation
        })
    }

    /// Close the session and discard its conversation
    pub fn end(self) -> SessionSummary {
        let exchanges = self
            .conversation
            .as_ref()
            .map(ConversationSession::exchange_count)
            .unwrap_or(0);
        let duration = self.started.elapsed();

        self.logger.log(ConversationEvent::session_end(
            &self.id,
            exchanges,
            duration.as_millis(),
        ));
        info!(session = %self.id, exchanges, "Session ended");

        SessionSummary {
            session_id: self.id,
            exchanges,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[test]
    fn test_conversation_is_created_lazily() {
        let mut session = AppSession::start();
        assert!(session.conversation().is_none());

        session.conversation_mut().record_exchange("hi", "hello");
        assert_eq!(session.conversation().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_conversation_mut_reuses_existing() {
        let mut session = AppSession::start();
        let first_id = session.conversation_mut().id().to_string();
        session.conversation_mut().record_exchange("a", "b");
        assert_eq!(session.conversation_mut().id(), first_id);
        assert_eq!(session.conversation_mut().exchange_count(), 1);
    }

    #[test]
    fn test_end_reports_exchanges() {
        let mut session = AppSession::start();
        session.conversation_mut().record_exchange("a", "b");
        session.conversation_mut().record_exchange("c", "d");

        let summary = session.end();
        assert_eq!(summary.exchanges, 2);
        assert!(summary.session_id.starts_with("session-"));
    }

    #[test]
    fn test_end_without_chat() {
        assert_eq!(AppSession::start().end().exchanges, 0);
    }

    #[test]
    fn test_boundaries_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let session = AppSession::start_with_logger(logger.clone());
        session.end();
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["session_start", "session_end"]
        );
    }
}
