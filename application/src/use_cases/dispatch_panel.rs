//! Panel dispatch.
//!
//! Maps a [`PanelInput`] to exactly one gateway call and returns a typed
//! [`PanelOutput`]. Blank input is not an error: the panel reports
//! [`PanelOutput::NotSubmitted`] and nothing is sent.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::progress::{BusyIndicator, NoProgress};
use crate::session::AppSession;
use crate::use_cases::converse::ConverseUseCase;
use intelli_domain::{
    DomainError, Embedding, ImageInput, InputLimits, Language, Panel, PromptTemplate, Request,
    RequestKind, Response, strip_code_fences,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Input(#[from] DomainError),
}

/// Typed input of each panel
#[derive(Debug, Clone)]
pub enum PanelInput {
    ChatBot {
        message: String,
    },
    ImageCaptioning {
        image: Option<ImageInput>,
        /// Replaces the default caption instruction
        instruction: Option<String>,
    },
    EmbedText {
        text: String,
    },
    AskAnything {
        question: String,
    },
    CodingAssistant {
        task: String,
        language: Language,
    },
    SentimentAnalysis {
        text: String,
    },
    SummarizeText {
        text: String,
    },
    Help,
}

impl PanelInput {
    pub fn panel(&self) -> Panel {
        match self {
            PanelInput::ChatBot { .. } => Panel::ChatBot,
            PanelInput::ImageCaptioning { .. } => Panel::ImageCaptioning,
            PanelInput::EmbedText { .. } => Panel::EmbedText,
            PanelInput::AskAnything { .. } => Panel::AskAnything,
            PanelInput::CodingAssistant { .. } => Panel::CodingAssistant,
            PanelInput::SentimentAnalysis { .. } => Panel::SentimentAnalysis,
            PanelInput::SummarizeText { .. } => Panel::SummarizeText,
            PanelInput::Help => Panel::Help,
        }
    }
}

/// Typed output of each panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutput {
    Reply(String),
    Caption(String),
    Embedding(Embedding),
    Answer(String),
    Code { language: Language, code: String },
    Sentiment(String),
    Summary(String),
    Help,
    /// Input was empty; nothing was sent
    NotSubmitted { panel: Panel, hint: &'static str },
}

impl PanelOutput {
    fn not_submitted(panel: Panel) -> Self {
        PanelOutput::NotSubmitted {
            panel,
            hint: panel.placeholder(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        !matches!(self, PanelOutput::NotSubmitted { .. })
    }
}

/// Routes panel input to the model gateway
pub struct PanelDispatcher {
    gateway: Arc<dyn ModelGateway>,
    converse: ConverseUseCase,
    limits: InputLimits,
    busy: Arc<dyn BusyIndicator>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl PanelDispatcher {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            converse: ConverseUseCase::new(gateway.clone()),
            gateway,
            limits: InputLimits::unlimited(),
            busy: Arc::new(NoProgress),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_busy_indicator(mut self, busy: Arc<dyn BusyIndicator>) -> Self {
        self.busy = busy;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Handle one submission on one panel
    pub async fn dispatch(
        &self,
        session: &mut AppSession,
        input: PanelInput,
    ) -> Result<PanelOutput, DispatchError> {
        let panel = input.panel();
        debug!(panel = %panel, "Dispatching panel input");

        match input {
            PanelInput::ChatBot { message } => self.chat(session, message).await,
            PanelInput::ImageCaptioning { image, instruction } => {
                self.caption(image, instruction).await
            }
            PanelInput::EmbedText { text } => self.embed(text).await,
            PanelInput::AskAnything { question } => {
                self.complete_text(panel, &question, PromptTemplate::ask, PanelOutput::Answer)
                    .await
            }
            PanelInput::CodingAssistant { task, language } => {
                self.complete_text(
                    panel,
                    &task,
                    |task| PromptTemplate::coding(language, task),
                    |response| PanelOutput::Code {
                        language,
                        code: strip_code_fences(&response),
                    },
                )
                .await
            }
            PanelInput::SentimentAnalysis { text } => {
                self.complete_text(panel, &text, PromptTemplate::sentiment, PanelOutput::Sentiment)
                    .await
            }
            PanelInput::SummarizeText { text } => {
                self.complete_text(panel, &text, PromptTemplate::summarize, PanelOutput::Summary)
                    .await
            }
            PanelInput::Help => Ok(PanelOutput::Help),
        }
    }

    async fn chat(
        &self,
        session: &mut AppSession,
        message: String,
    ) -> Result<PanelOutput, DispatchError> {
        let panel = Panel::ChatBot;
        if message.trim().is_empty() {
            return Ok(PanelOutput::not_submitted(panel));
        }
        self.limits.check_text(&message)?;

        self.conversation_logger
            .log(ConversationEvent::request(panel, RequestKind::Chat, &message));
        let conversation = session.conversation_mut();
        let reply = self
            .bracketed(panel, self.converse.execute(conversation, &message))
            .await?;
        self.conversation_logger
            .log(ConversationEvent::text_response(panel, &reply));

        Ok(PanelOutput::Reply(reply))
    }

    async fn caption(
        &self,
        image: Option<ImageInput>,
        instruction: Option<String>,
    ) -> Result<PanelOutput, DispatchError> {
        let panel = Panel::ImageCaptioning;
        let Some(image) = image else {
            return Ok(PanelOutput::not_submitted(panel));
        };
        self.limits.check_image(&image)?;

        let instruction = instruction
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| PromptTemplate::caption_instruction().to_string());
        debug!(
            format = %image.format(),
            bytes = image.len(),
            "Captioning image"
        );

        let text = self
            .send(panel, Request::vision(instruction, image))
            .await?
            .into_text()
            .ok_or_else(|| unexpected_vector(panel))?;
        Ok(PanelOutput::Caption(text))
    }

    async fn embed(&self, text: String) -> Result<PanelOutput, DispatchError> {
        let panel = Panel::EmbedText;
        if text.trim().is_empty() {
            return Ok(PanelOutput::not_submitted(panel));
        }
        self.limits.check_text(&text)?;

        let embedding = self
            .send(panel, Request::embedding(text))
            .await?
            .into_vector()
            .ok_or_else(|| {
                GatewayError::InvalidResponse("expected an embedding, got text".to_string())
            })?;
        Ok(PanelOutput::Embedding(embedding))
    }

    /// Shared path of the four single-shot completion panels
    async fn complete_text(
        &self,
        panel: Panel,
        input: &str,
        build_prompt: impl FnOnce(&str) -> String,
        wrap: impl FnOnce(String) -> PanelOutput,
    ) -> Result<PanelOutput, DispatchError> {
        if input.trim().is_empty() {
            return Ok(PanelOutput::not_submitted(panel));
        }
        self.limits.check_text(input)?;

        let text = self
            .send(panel, Request::completion(build_prompt(input)))
            .await?
            .into_text()
            .ok_or_else(|| unexpected_vector(panel))?;
        Ok(wrap(text))
    }

    /// Issue one context-free request and log both ends of it
    async fn send(&self, panel: Panel, request: Request) -> Result<Response, DispatchError> {
        self.conversation_logger.log(ConversationEvent::request(
            panel,
            request.kind(),
            request.text(),
        ));

        let response = self
            .bracketed(panel, self.gateway.execute(&request, &[]))
            .await?;

        let event = match &response {
            Response::Text(text) => ConversationEvent::text_response(panel, text),
            Response::Vector(embedding) => {
                ConversationEvent::vector_response(panel, embedding.dimension())
            }
        };
        self.conversation_logger.log(event);

        Ok(response)
    }

    /// Run a gateway call between the busy callbacks
    async fn bracketed<T>(
        &self,
        panel: Panel,
        call: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        info!(panel = %panel, "Calling model");
        self.busy.on_busy_start(panel);
        let result = call.await;
        self.busy.on_busy_end(panel, result.is_ok());

        if let Err(e) = &result {
            warn!(panel = %panel, "Model call failed: {}", e);
            self.conversation_logger
                .log(ConversationEvent::request_failed(panel, &e.to_string()));
        }
        result
    }
}

fn unexpected_vector(panel: Panel) -> GatewayError {
    GatewayError::InvalidResponse(format!("{} expected text, got an embedding", panel))
}
