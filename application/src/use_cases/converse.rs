//! Converse use case.
//!
//! One conversational turn: the new user message is sent together with the
//! whole session history, and the exchange is recorded only once the model
//! has answered. A failed call leaves the session untouched.

use crate::ports::model_gateway::{GatewayError, ModelGateway};
use intelli_domain::{ConversationSession, truncate_str};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ConverseUseCase {
    gateway: Arc<dyn ModelGateway>,
}

impl ConverseUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Send `message` in the context of `session` and return the reply
    pub async fn execute(
        &self,
        session: &mut ConversationSession,
        message: &str,
    ) -> Result<String, GatewayError> {
        info!(
            conversation = %session.id(),
            "Chat turn {}: {}",
            session.exchange_count() + 1,
            truncate_str(message, 100)
        );

        let history = session.history_with(message);
        debug!("Sending {} turns", history.len());

        let reply = self.gateway.converse(&history).await?;
        session.record_exchange(message, reply.clone());

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use intelli_domain::{Embedding, ImageInput, Role, Turn};
    use std::sync::Mutex;

    /// Replies "reply N" and records the history length of each call
    #[derive(Default)]
    struct ScriptedGateway {
        seen: Mutex<Vec<usize>>,
        fail: bool,
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        async fn converse(&self, history: &[Turn]) -> Result<String, GatewayError> {
            if self.fail {
                return Err(GatewayError::Connection("network unreachable".into()));
            }
            let mut seen = self.seen.lock().unwrap();
            seen.push(history.len());
            Ok(format!("reply {}", seen.len()))
        }

        async fn caption(&self, _: &str, _: &ImageInput) -> Result<String, GatewayError> {
            unreachable!()
        }

        async fn embed(&self, _: &str) -> Result<Embedding, GatewayError> {
            unreachable!()
        }

        async fn complete(&self, _: &str) -> Result<String, GatewayError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_history_grows_by_two_per_exchange() {
        let gateway = Arc::new(ScriptedGateway::default());
        let use_case = ConverseUseCase::new(gateway.clone());
        let mut session = ConversationSession::new("test");

        for n in 1..=3 {
            let reply = use_case.execute(&mut session, "question").await.unwrap();
            assert_eq!(reply, format!("reply {n}"));
            assert_eq!(session.len(), 2 * n);
        }

        // Each call carried the full history plus the new message
        assert_eq!(*gateway.seen.lock().unwrap(), vec![1, 3, 5]);
        let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_propagates_and_leaves_session_unchanged() {
        let gateway = Arc::new(ScriptedGateway {
            fail: true,
            ..Default::default()
        });
        let use_case = ConverseUseCase::new(gateway);
        let mut session = ConversationSession::new("test");
        session.record_exchange("earlier", "answer");

        let result = use_case.execute(&mut session, "next").await;
        assert!(matches!(result, Err(GatewayError::Connection(_))));
        assert_eq!(session.len(), 2);
    }
}
