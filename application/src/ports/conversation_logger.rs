//! Port for structured conversation logging.
//!
//! Records what each session sent to the model and what came back, as a
//! machine-readable transcript (JSONL in the infrastructure adapter). This
//! is separate from `tracing`, which carries human-readable diagnostics.
//! Nothing written here is ever read back by the application.

use intelli_domain::{Panel, RequestKind, truncate_str};
use serde_json::{Value, json};

/// Longest prompt/response text copied into a transcript record
const TEXT_PREVIEW_BYTES: usize = 2000;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "request", "response", "session_end").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn session_start(session_id: &str) -> Self {
        Self::new("session_start", json!({ "session": session_id }))
    }

    pub fn session_end(session_id: &str, exchanges: usize, duration_ms: u128) -> Self {
        Self::new(
            "session_end",
            json!({
                "session": session_id,
                "exchanges": exchanges,
                "duration_ms": duration_ms,
            }),
        )
    }

    pub fn request(panel: Panel, kind: RequestKind, text: &str) -> Self {
        Self::new(
            "request",
            json!({
                "panel": panel.slug(),
                "kind": kind.as_str(),
                "bytes": text.len(),
                "text": truncate_str(text, TEXT_PREVIEW_BYTES),
            }),
        )
    }

    pub fn text_response(panel: Panel, text: &str) -> Self {
        Self::new(
            "response",
            json!({
                "panel": panel.slug(),
                "bytes": text.len(),
                "text": truncate_str(text, TEXT_PREVIEW_BYTES),
            }),
        )
    }

    pub fn vector_response(panel: Panel, dimension: usize) -> Self {
        Self::new(
            "response",
            json!({
                "panel": panel.slug(),
                "dimension": dimension,
            }),
        )
    }

    pub fn request_failed(panel: Panel, error: &str) -> Self {
        Self::new(
            "request_failed",
            json!({
                "panel": panel.slug(),
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; adapters swallow their own I/O
/// errors so a broken log file never interrupts a panel.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_event_truncates_text() {
        let long = "a".repeat(TEXT_PREVIEW_BYTES + 50);
        let event = ConversationEvent::request(Panel::SummarizeText, RequestKind::Completion, &long);
        assert_eq!(event.event_type, "request");
        assert_eq!(event.payload["panel"], "summarize");
        assert_eq!(event.payload["kind"], "completion");
        assert_eq!(event.payload["bytes"], TEXT_PREVIEW_BYTES + 50);
        assert_eq!(
            event.payload["text"].as_str().map(str::len),
            Some(TEXT_PREVIEW_BYTES)
        );
    }

    #[test]
    fn test_vector_response_has_no_text() {
        let event = ConversationEvent::vector_response(Panel::EmbedText, 768);
        assert_eq!(event.payload["dimension"], 768);
        assert!(event.payload.get("text").is_none());
    }
}
