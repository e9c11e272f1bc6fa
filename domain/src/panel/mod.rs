//! Panels: the eight selectable interaction modes.

pub mod language;

use crate::core::error::DomainError;
use crate::request::RequestKind;
use serde::{Deserialize, Serialize};

/// A selectable interaction mode (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    ChatBot,
    ImageCaptioning,
    EmbedText,
    AskAnything,
    CodingAssistant,
    SentimentAnalysis,
    SummarizeText,
    Help,
}

impl Panel {
    /// All panels in menu order
    pub const ALL: [Panel; 8] = [
        Panel::ChatBot,
        Panel::ImageCaptioning,
        Panel::EmbedText,
        Panel::AskAnything,
        Panel::CodingAssistant,
        Panel::SentimentAnalysis,
        Panel::SummarizeText,
        Panel::Help,
    ];

    /// Menu label
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::ChatBot => "ChatBot",
            Panel::ImageCaptioning => "Image Captioning",
            Panel::EmbedText => "Embed Text",
            Panel::AskAnything => "Ask me Anything",
            Panel::CodingAssistant => "Coding Assistant",
            Panel::SentimentAnalysis => "Sentiment Analysis",
            Panel::SummarizeText => "Summarize Text",
            Panel::Help => "Help",
        }
    }

    /// Short identifier used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Panel::ChatBot => "chat",
            Panel::ImageCaptioning => "caption",
            Panel::EmbedText => "embed",
            Panel::AskAnything => "ask",
            Panel::CodingAssistant => "code",
            Panel::SentimentAnalysis => "sentiment",
            Panel::SummarizeText => "summarize",
            Panel::Help => "help",
        }
    }

    /// Prompt shown in the input control while it is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Panel::ChatBot => "Ask IntelliApp...",
            Panel::ImageCaptioning => "Please upload an image file.",
            Panel::EmbedText => "Enter the text to get the embeddings",
            Panel::AskAnything => "Ask IntelliApp...",
            Panel::CodingAssistant => "Describe the coding task or problem...",
            Panel::SentimentAnalysis => "Enter the text to analyze sentiment",
            Panel::SummarizeText => "Enter the text to summarize",
            Panel::Help => "",
        }
    }

    /// The gateway operation this panel triggers, if any
    pub fn operation(&self) -> Option<RequestKind> {
        match self {
            Panel::ChatBot => Some(RequestKind::Chat),
            Panel::ImageCaptioning => Some(RequestKind::Vision),
            Panel::EmbedText => Some(RequestKind::Embedding),
            Panel::AskAnything
            | Panel::CodingAssistant
            | Panel::SentimentAnalysis
            | Panel::SummarizeText => Some(RequestKind::Completion),
            Panel::Help => None,
        }
    }

    /// 1-based position in the menu
    pub fn menu_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Look up a panel by its 1-based menu position
    pub fn from_menu_index(index: usize) -> Option<Panel> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Panel {
    type Err = DomainError;

    /// Accepts the menu label, the slug, or the 1-based menu index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(index) = needle.parse::<usize>() {
            return Panel::from_menu_index(index)
                .ok_or_else(|| DomainError::UnknownPanel(needle.to_string()));
        }
        Panel::ALL
            .into_iter()
            .find(|p| {
                p.as_str().eq_ignore_ascii_case(needle) || p.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownPanel(needle.to_string()))
    }
}
