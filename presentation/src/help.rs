//! Help page content

use colored::Colorize;
use intelli_domain::Panel;

pub const HELP_TEXT: &str = "\
IntelliApp forwards your text and images to Google Gemini.

Panels:
  1. ChatBot             multi-turn conversation; /history shows the transcript
  2. Image Captioning    caption a jpg, jpeg or png image
  3. Embed Text          embedding vector for semantic search or clustering
  4. Ask me Anything     one question, one answer
  5. Coding Assistant    code snippet for a task in a chosen language
  6. Sentiment Analysis  positive, negative or neutral
  7. Summarize Text      brief summary of a block of text
  8. Help                this page

Commands (interactive mode):
  /menu    back to the panel menu
  /help    show this page
  /history show the chat transcript
  /quit    exit

Tips: be specific, and keep inputs to a reasonable size.
";

/// Help page with a colored title
pub fn help_text() -> String {
    format!("{}\n\n{}", Panel::Help.as_str().cyan().bold(), HELP_TEXT)
}
