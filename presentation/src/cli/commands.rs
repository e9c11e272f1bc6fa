//! CLI command definitions

use clap::{Parser, Subcommand};
use intelli_domain::Language;
use std::path::PathBuf;

/// CLI arguments for intelliapp
#[derive(Parser, Debug)]
#[command(name = "intelliapp", disable_help_subcommand = true)]
#[command(author, version, about = "Gemini in your terminal: chat, captions, embeddings, and text tools")]
#[command(long_about = r#"
IntelliApp forwards text and images to Google Gemini and shows the answers
in eight panels: ChatBot, Image Captioning, Embed Text, Ask me Anything,
Coding Assistant, Sentiment Analysis, Summarize Text, and Help.

Run without a subcommand for the interactive menu, or pick a panel directly.

The API key is read from $GEMINI_API_KEY (or $GOOGLE_API_KEY).

Configuration files are loaded from (in priority order):
1. INTELLIAPP_* environment variables
2. --config <path>       Explicit config file
3. ./intelliapp.toml     Project-level config
4. ~/.config/intelliapp/config.toml   Global config

Example:
  intelliapp
  intelliapp chat
  intelliapp caption sunset.jpg
  intelliapp code "Sort a list of numbers" --language go
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of requests and responses
    #[arg(long, value_name = "PATH", global = true)]
    pub log_conversation: Option<PathBuf>,
}

/// One panel per subcommand
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive menu directly in the ChatBot panel
    Chat,

    /// Generate a caption for a JPEG or PNG image
    Caption {
        /// Image file (jpg, jpeg, png)
        image: PathBuf,

        /// Replace the default caption instruction
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
    },

    /// Compute an embedding vector for the text
    Embed { text: String },

    /// Ask a single question
    Ask { question: String },

    /// Generate a code snippet for a task
    Code {
        task: String,

        /// Target language (python, javascript, java, c++, go, ruby, swift, php, c#, other)
        #[arg(short, long, default_value = "python", value_parser = parse_language)]
        language: Language,
    },

    /// Analyze the sentiment of the text
    Sentiment { text: String },

    /// Summarize the text
    Summarize { text: String },

    /// Show the help page
    Help,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["intelliapp"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_code_language() {
        let cli =
            Cli::try_parse_from(["intelliapp", "code", "fizzbuzz", "--language", "C++"]).unwrap();
        match cli.command {
            Some(Command::Code { task, language }) => {
                assert_eq!(task, "fizzbuzz");
                assert_eq!(language, Language::Cpp);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_code_language_defaults_to_python() {
        let cli = Cli::try_parse_from(["intelliapp", "code", "fizzbuzz"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Code {
                language: Language::Python,
                ..
            })
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["intelliapp", "ask", "why?", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn test_caption_prompt() {
        let cli =
            Cli::try_parse_from(["intelliapp", "caption", "a.png", "--prompt", "Be brief"]).unwrap();
        match cli.command {
            Some(Command::Caption { image, prompt }) => {
                assert_eq!(image, PathBuf::from("a.png"));
                assert_eq!(prompt.as_deref(), Some("Be brief"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
