//! Interactive menu REPL
//!
//! The menu lists the eight panels. Choosing one prints its header, prompts
//! for that panel's inputs, and issues a single dispatch. ChatBot stays open
//! for further messages until `/menu`.

use crate::config::{OutputConfig, ReplConfig};
use crate::help::help_text;
use crate::output::console::ConsoleFormatter;
use intelli_application::{AppSession, ImageSource, PanelDispatcher, PanelInput, PanelOutput};
use intelli_domain::{ConversationSession, Language, Panel};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A line typed at the menu prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuChoice {
    Open(Panel),
    ShowMenu,
    ShowHelp,
    ShowHistory,
    Quit,
    Empty,
    Unknown(String),
}

impl MenuChoice {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => MenuChoice::Empty,
            "/quit" | "/exit" | "/q" => MenuChoice::Quit,
            "/menu" | "/m" => MenuChoice::ShowMenu,
            "/help" | "/h" | "/?" => MenuChoice::ShowHelp,
            "/history" => MenuChoice::ShowHistory,
            _ => line
                .parse::<Panel>()
                .map(MenuChoice::Open)
                .unwrap_or_else(|_| MenuChoice::Unknown(line.to_string())),
        }
    }
}

/// Result of prompting inside a panel
enum Prompted {
    Text(String),
    Back,
    Quit,
}

/// What to do after a panel returns
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

/// Language picker input: empty keeps the default, otherwise a 1-based
/// index into [`Language::ALL`] or a language name.
fn parse_language_choice(line: &str) -> Option<Language> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Language::default());
    }
    if let Ok(index) = line.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| Language::ALL.get(i).copied());
    }
    line.parse().ok()
}

/// Build the dispatch input for the single-field text panels
fn text_input(panel: Panel, text: String) -> Option<PanelInput> {
    let input = match panel {
        Panel::ChatBot => PanelInput::ChatBot { message: text },
        Panel::EmbedText => PanelInput::EmbedText { text },
        Panel::AskAnything => PanelInput::AskAnything { question: text },
        Panel::SentimentAnalysis => PanelInput::SentimentAnalysis { text },
        Panel::SummarizeText => PanelInput::SummarizeText { text },
        Panel::ImageCaptioning | Panel::CodingAssistant | Panel::Help => return None,
    };
    Some(input)
}

/// Earlier exchanges shown when ChatBot is reopened
fn chat_replay(conversation: Option<&ConversationSession>) -> Option<String> {
    conversation
        .filter(|c| !c.is_empty())
        .map(|c| ConsoleFormatter::format_history(Some(c)))
}

/// Interactive menu over all panels
pub struct MenuRepl {
    dispatcher: PanelDispatcher,
    images: Arc<dyn ImageSource>,
    output: OutputConfig,
    history_path: Option<PathBuf>,
}

impl MenuRepl {
    pub fn new(dispatcher: PanelDispatcher, images: Arc<dyn ImageSource>) -> Self {
        Self {
            dispatcher,
            images,
            output: OutputConfig::default(),
            history_path: None,
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Take the history location from the REPL settings
    pub fn with_repl_config(mut self, config: &ReplConfig) -> Self {
        self.history_path = config.history_path();
        self
    }

    /// Run until `/quit` or end of input. `start` opens a panel right away.
    pub async fn run(&self, session: &mut AppSession, start: Option<Panel>) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                warn!("Cannot create history directory {}: {}", parent.display(), e);
            }
            if let Err(e) = rl.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        self.print_welcome();

        let mut flow = match start {
            Some(panel) => self.run_panel(&mut rl, session, panel).await,
            None => Flow::Menu,
        };

        while flow == Flow::Menu {
            print!("{}", ConsoleFormatter::menu());
            flow = self.menu_loop(&mut rl, session).await;
        }

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Cannot save history to {}: {}", path.display(), e);
        }
        println!("Bye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 IntelliApp                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Pick a panel by number or name. /help for commands, /quit to exit.");
    }

    /// Read menu choices until a panel finishes or the user quits
    async fn menu_loop(&self, rl: &mut DefaultEditor, session: &mut AppSession) -> Flow {
        loop {
            let line = match rl.readline("menu> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Flow::Quit,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return Flow::Quit;
                }
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Open(panel) => return self.run_panel(rl, session, panel).await,
                MenuChoice::ShowMenu => print!("{}", ConsoleFormatter::menu()),
                MenuChoice::ShowHelp => println!("{}", help_text()),
                MenuChoice::ShowHistory => {
                    print!("{}", ConsoleFormatter::format_history(session.conversation()))
                }
                MenuChoice::Quit => return Flow::Quit,
                MenuChoice::Empty => {}
                MenuChoice::Unknown(cmd) => {
                    println!("Unknown panel or command: {}", cmd);
                    println!("Type a number from 1 to {} or /help", Panel::ALL.len());
                }
            }
        }
    }

    fn prompt(&self, rl: &mut DefaultEditor, prompt: &str) -> Prompted {
        match rl.readline(prompt) {
            Ok(line) => match line.trim() {
                "/quit" | "/exit" | "/q" => Prompted::Quit,
                "/menu" | "/m" => Prompted::Back,
                trimmed => {
                    if !trimmed.is_empty()
                        && let Err(e) = rl.add_history_entry(trimmed)
                    {
                        debug!("History entry dropped: {}", e);
                    }
                    Prompted::Text(line)
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Prompted::Back
            }
            Err(ReadlineError::Eof) => Prompted::Quit,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                Prompted::Quit
            }
        }
    }

    async fn run_panel(&self, rl: &mut DefaultEditor, session: &mut AppSession, panel: Panel) -> Flow {
        debug!(panel = %panel, "Opening panel");
        print!("{}", ConsoleFormatter::panel_header(panel));

        match panel {
            Panel::ChatBot => return self.chat_loop(rl, session).await,
            Panel::Help => {
                self.submit(session, PanelInput::Help).await;
            }
            Panel::ImageCaptioning => {
                let path = match self.prompt(rl, "image path> ") {
                    Prompted::Text(path) => path,
                    Prompted::Back => return Flow::Menu,
                    Prompted::Quit => return Flow::Quit,
                };
                let path = path.trim();
                let image = if path.is_empty() {
                    None
                } else {
                    match self.images.load(Path::new(path), self.dispatcher.limits()) {
                        Ok(image) => Some(image),
                        Err(e) => {
                            eprintln!("{}", ConsoleFormatter::format_error(&e));
                            return Flow::Menu;
                        }
                    }
                };
                self.submit(
                    session,
                    PanelInput::ImageCaptioning {
                        image,
                        instruction: None,
                    },
                )
                .await;
            }
            Panel::CodingAssistant => {
                let task = match self.prompt(rl, "task> ") {
                    Prompted::Text(task) => task,
                    Prompted::Back => return Flow::Menu,
                    Prompted::Quit => return Flow::Quit,
                };
                let Some(language) = self.pick_language(rl) else {
                    return Flow::Menu;
                };
                self.submit(session, PanelInput::CodingAssistant { task, language })
                    .await;
            }
            _ => {
                let text = match self.prompt(rl, "text> ") {
                    Prompted::Text(text) => text,
                    Prompted::Back => return Flow::Menu,
                    Prompted::Quit => return Flow::Quit,
                };
                if let Some(input) = text_input(panel, text) {
                    self.submit(session, input).await;
                }
            }
        }
        Flow::Menu
    }

    fn pick_language(&self, rl: &mut DefaultEditor) -> Option<Language> {
        for (i, language) in Language::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, language);
        }
        loop {
            let line = match self.prompt(rl, "language [Python]> ") {
                Prompted::Text(line) => line,
                Prompted::Back | Prompted::Quit => return None,
            };
            match parse_language_choice(&line) {
                Some(language) => return Some(language),
                None => println!("Unknown language: {}", line.trim()),
            }
        }
    }

    async fn chat_loop(&self, rl: &mut DefaultEditor, session: &mut AppSession) -> Flow {
        if let Some(replay) = chat_replay(session.conversation()) {
            print!("{}", replay);
        }
        println!("Type /menu to go back, /history to see the conversation.");
        loop {
            let message = match self.prompt(rl, "you> ") {
                Prompted::Text(message) => message,
                Prompted::Back => return Flow::Menu,
                Prompted::Quit => return Flow::Quit,
            };
            match message.trim() {
                "" => continue,
                "/history" => {
                    print!("{}", ConsoleFormatter::format_history(session.conversation()));
                    continue;
                }
                "/help" | "/h" | "/?" => {
                    println!("{}", help_text());
                    continue;
                }
                _ => {}
            }
            self.submit(session, PanelInput::ChatBot { message }).await;
        }
    }

    /// Dispatch once and print the result; failures end only this action
    async fn submit(&self, session: &mut AppSession, input: PanelInput) {
        let panel = input.panel();
        match self.dispatcher.dispatch(session, input).await {
            Ok(output) => self.print_output(panel, &output),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_dispatch_error(&e)),
        }
    }

    fn print_output(&self, panel: Panel, output: &PanelOutput) {
        println!("{}", ConsoleFormatter::render(panel, output, self.output.json));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_by_index_and_name() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Open(Panel::ChatBot));
        assert_eq!(MenuChoice::parse(" 8 "), MenuChoice::Open(Panel::Help));
        assert_eq!(
            MenuChoice::parse("summarize"),
            MenuChoice::Open(Panel::SummarizeText)
        );
        assert_eq!(
            MenuChoice::parse("Coding Assistant"),
            MenuChoice::Open(Panel::CodingAssistant)
        );
    }

    #[test]
    fn test_menu_commands() {
        assert_eq!(MenuChoice::parse("/quit"), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse("/menu"), MenuChoice::ShowMenu);
        assert_eq!(MenuChoice::parse("/help"), MenuChoice::ShowHelp);
        assert_eq!(MenuChoice::parse("/history"), MenuChoice::ShowHistory);
        assert_eq!(MenuChoice::parse("   "), MenuChoice::Empty);
    }

    #[test]
    fn test_menu_unknown() {
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Unknown("9".into()));
        assert_eq!(
            MenuChoice::parse("weather"),
            MenuChoice::Unknown("weather".into())
        );
    }

    #[test]
    fn test_language_choice() {
        assert_eq!(parse_language_choice(""), Some(Language::Python));
        assert_eq!(parse_language_choice("4"), Some(Language::Cpp));
        assert_eq!(parse_language_choice("ruby"), Some(Language::Ruby));
        assert_eq!(parse_language_choice("0"), None);
        assert_eq!(parse_language_choice("11"), None);
        assert_eq!(parse_language_choice("cobol"), None);
    }

    #[test]
    fn test_chat_replay_shows_previous_exchanges() {
        assert!(chat_replay(None).is_none());
        assert!(chat_replay(Some(&ConversationSession::new("empty"))).is_none());

        let mut conversation = ConversationSession::new("t");
        conversation.record_exchange("What is Rust?", "A systems language.");
        conversation.record_exchange("Who made it?", "Graydon Hoare.");
        let replay = chat_replay(Some(&conversation)).unwrap();

        let first = replay.find("What is Rust?").unwrap();
        let second = replay.find("Who made it?").unwrap();
        assert!(first < second);
        assert!(replay.contains("Graydon Hoare."));
    }

    #[test]
    fn test_text_input_covers_text_panels() {
        let input = text_input(Panel::SentimentAnalysis, "great".into()).unwrap();
        assert_eq!(input.panel(), Panel::SentimentAnalysis);
        assert!(text_input(Panel::CodingAssistant, "x".into()).is_none());
        assert!(text_input(Panel::Help, String::new()).is_none());
    }
}
