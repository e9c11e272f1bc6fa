//! Prompt templates for the completion and vision panels

use crate::panel::language::Language;

/// Templates for the prompts each panel sends
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction sent alongside an image on the captioning panel
    pub fn caption_instruction() -> &'static str {
        "Analyze the content of this image and generate a detailed and descriptive caption \
         that highlights the main objects, scene, and context. Make the caption engaging and \
         informative, capturing the essence of the moment shown in the image."
    }

    /// Coding Assistant prompt
    pub fn coding(language: Language, task: &str) -> String {
        format!(
            "Generate a unique code snippet in {} for the following task:\n{}",
            language.display_name(),
            task
        )
    }

    /// Sentiment Analysis prompt
    pub fn sentiment(text: &str) -> String {
        format!("Analyze the sentiment of the following text:\n{}", text)
    }

    /// Summarize Text prompt
    pub fn summarize(text: &str) -> String {
        format!(
            "Please summarize the following text in a brief and concise manner:\n\n{}",
            text
        )
    }

    /// Ask me Anything sends the question as-is
    pub fn ask(question: &str) -> String {
        question.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_instruction_is_single_paragraph() {
        let prompt = PromptTemplate::caption_instruction();
        assert!(prompt.starts_with("Analyze the content of this image"));
        assert!(!prompt.contains('\n'));
        assert!(!prompt.contains("  "));
    }

    #[test]
    fn test_coding_prompt() {
        let prompt = PromptTemplate::coding(Language::Cpp, "reverse a string");
        assert_eq!(
            prompt,
            "Generate a unique code snippet in C++ for the following task:\nreverse a string"
        );
    }

    #[test]
    fn test_sentiment_prompt() {
        assert_eq!(
            PromptTemplate::sentiment("I love it"),
            "Analyze the sentiment of the following text:\nI love it"
        );
    }

    #[test]
    fn test_summarize_prompt_has_blank_line() {
        let prompt = PromptTemplate::summarize("long text");
        assert!(prompt.ends_with("manner:\n\nlong text"));
    }

    #[test]
    fn test_ask_is_verbatim() {
        assert_eq!(PromptTemplate::ask("Why is the sky blue?"), "Why is the sky blue?");
    }
}
