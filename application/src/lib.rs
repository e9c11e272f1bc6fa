//! Application layer for IntelliApp
//!
//! This crate contains the use cases, port definitions, and the interactive
//! session lifecycle. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    image_source::{ImageLoadError, ImageSource},
    model_gateway::{GatewayError, ModelGateway},
    progress::{BusyIndicator, NoProgress},
};
pub use session::{AppSession, SessionSummary};
pub use use_cases::converse::ConverseUseCase;
pub use use_cases::dispatch_panel::{DispatchError, PanelDispatcher, PanelInput, PanelOutput};
