//! Console output formatter for panel results

use colored::Colorize;
use intelli_application::{DispatchError, PanelOutput};
use intelli_domain::{ConversationSession, Panel, Role};
use serde_json::json;

/// Formats panel results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title shown at the top of each panel
    pub fn panel_title(panel: Panel) -> &'static str {
        match panel {
            Panel::ChatBot => "🤖 ChatBot",
            Panel::ImageCaptioning => "📸 Snap Narrate",
            Panel::EmbedText => "🔡 Embed Text",
            Panel::AskAnything => "❓ Ask me Anything",
            Panel::CodingAssistant => "💻 Coding Assistant",
            Panel::SentimentAnalysis => "😊 Sentiment Analysis",
            Panel::SummarizeText => "📝 Summarize Text",
            Panel::Help => "Help & Documentation",
        }
    }

    /// One-line usage hint under the title
    pub fn panel_hint(panel: Panel) -> &'static str {
        match panel {
            Panel::ChatBot => {
                "Ask anything related to general knowledge, trivia, or specific information you need."
            }
            Panel::ImageCaptioning => {
                "Upload an image file to generate a descriptive caption."
            }
            Panel::EmbedText => {
                "Enter a block of text for which you need embeddings. Embeddings can be used for tasks like semantic search, clustering, and classification."
            }
            Panel::AskAnything => "Ask any question to get a detailed and informative answer.",
            Panel::CodingAssistant => {
                "Describe the coding problem or task you need help with. Be as detailed as possible."
            }
            Panel::SentimentAnalysis => {
                "Enter text to analyze its sentiment (positive, negative, neutral)."
            }
            Panel::SummarizeText => "Enter a block of text to get a concise summary.",
            Panel::Help => "How to use each panel.",
        }
    }

    /// Panel header: title, rule, and hint
    pub fn panel_header(panel: Panel) -> String {
        let title = Self::panel_title(panel);
        format!(
            "\n{}\n{}\n{} {}\n",
            title.cyan().bold(),
            "-".repeat(40),
            "Hint:".bold(),
            Self::panel_hint(panel)
        )
    }

    /// The numbered panel menu
    pub fn menu() -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "IntelliApp".cyan().bold()));
        for panel in Panel::ALL {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}.", panel.menu_index()).yellow(),
                panel
            ));
        }
        output
    }

    /// Format a panel result for the terminal
    pub fn format(output: &PanelOutput) -> String {
        match output {
            PanelOutput::Reply(text) => format!("{} {}\n", "IntelliApp:".green().bold(), text),
            PanelOutput::Caption(text) => format!("{}\n{}\n", "Caption".green().bold(), text),
            PanelOutput::Embedding(embedding) => format!(
                "{} {}\n{:?}\n",
                "Dimension:".dimmed(),
                embedding.dimension(),
                embedding.values
            ),
            PanelOutput::Answer(text)
            | PanelOutput::Sentiment(text)
            | PanelOutput::Summary(text) => format!("{}\n", text),
            PanelOutput::Code { language, code } => format!(
                "{}\n{}\n",
                format!("── {} ──", language).yellow().bold(),
                code.trim_end()
            ),
            PanelOutput::Help => crate::help::help_text(),
            PanelOutput::NotSubmitted { hint, .. } => {
                format!("{} {}\n", "Nothing submitted.".dimmed(), hint)
            }
        }
    }

    /// Format a panel result as JSON
    pub fn format_json(panel: Panel, output: &PanelOutput) -> String {
        let body = match output {
            PanelOutput::Reply(text)
            | PanelOutput::Caption(text)
            | PanelOutput::Answer(text)
            | PanelOutput::Sentiment(text)
            | PanelOutput::Summary(text) => json!({ "text": text }),
            PanelOutput::Embedding(embedding) => json!({
                "dimension": embedding.dimension(),
                "values": embedding.values,
            }),
            PanelOutput::Code { language, code } => json!({
                "language": language.display_name(),
                "code": code,
            }),
            PanelOutput::Help => json!({ "text": crate::help::HELP_TEXT }),
            PanelOutput::NotSubmitted { hint, .. } => json!({
                "submitted": false,
                "hint": hint,
            }),
        };
        let record = json!({ "panel": panel.slug(), "output": body });
        serde_json::to_string_pretty(&record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Console or JSON rendering, depending on `json`
    pub fn render(panel: Panel, output: &PanelOutput, json: bool) -> String {
        if json {
            Self::format_json(panel, output)
        } else {
            Self::format(output)
        }
    }

    /// Format the chat transcript for `/history`
    pub fn format_history(conversation: Option<&ConversationSession>) -> String {
        let Some(conversation) = conversation.filter(|c| !c.is_empty()) else {
            return format!("{}\n", "No messages yet.".dimmed());
        };
        let mut output = String::new();
        for turn in conversation.turns() {
            let speaker = match turn.role {
                Role::User => "You:".cyan().bold(),
                Role::Assistant => "IntelliApp:".green().bold(),
            };
            output.push_str(&format!("{} {}\n", speaker, turn.text));
        }
        output
    }

    /// Error line for a failed dispatch, with a hint for key and quota problems
    pub fn format_dispatch_error(error: &DispatchError) -> String {
        let line = Self::format_error(error);
        let hint = match error {
            DispatchError::Gateway(e) if e.is_auth() => {
                Some("The API key was rejected. Check GEMINI_API_KEY.")
            }
            DispatchError::Gateway(e) if e.is_quota() => {
                Some("Quota exhausted. Wait a moment and try again.")
            }
            _ => None,
        };
        match hint {
            Some(hint) => format!("{}\n{}", line, hint.dimmed()),
            None => line,
        }
    }

    /// Generic error line for a failed panel action
    pub fn format_error(error: &dyn std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }
}
