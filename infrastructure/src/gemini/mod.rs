//! Gemini adapter
//!
//! Implements the [`ModelGateway`](intelli_application::ModelGateway) port
//! over the Gemini REST API (`generateContent` and `embedContent`).

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
