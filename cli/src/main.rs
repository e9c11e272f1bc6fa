//! CLI entrypoint for IntelliApp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use intelli_application::{
    AppSession, BusyIndicator, ConversationLogger, NoConversationLogger, NoProgress,
    PanelDispatcher, PanelInput, PanelOutput,
};
use intelli_domain::{Panel, Severity};
use intelli_infrastructure::{
    ConfigLoader, FileConfig, FsImageSource, GeminiClient, GeminiModelGateway,
    JsonlConversationLogger, load_image,
};
use intelli_presentation::{
    BusySpinner, Cli, Command, ConsoleFormatter, MenuRepl, OutputConfig, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber; the guard must outlive `main` when
/// logging to a file.
fn init_logging(verbose: u8, file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(log_file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))
}

/// Translate a one-shot subcommand into panel input
fn one_shot_input(command: Command, dispatcher: &PanelDispatcher) -> Result<PanelInput> {
    let input = match command {
        Command::Caption { image, prompt } => {
            let image = load_image(&image, dispatcher.limits())?;
            PanelInput::ImageCaptioning {
                image: Some(image),
                instruction: prompt,
            }
        }
        Command::Embed { text } => PanelInput::EmbedText { text },
        Command::Ask { question } => PanelInput::AskAnything { question },
        Command::Code { task, language } => PanelInput::CodingAssistant { task, language },
        Command::Sentiment { text } => PanelInput::SentimentAnalysis { text },
        Command::Summarize { text } => PanelInput::SummarizeText { text },
        Command::Chat | Command::Help => bail!("not a one-shot panel command"),
    };
    Ok(input)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_ref())?;

    info!("Starting IntelliApp");

    let mut has_errors = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                eprintln!("config error: {}", issue.message);
                has_errors = true;
            }
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if has_errors {
        bail!("configuration has errors; fix them or run with --no-config");
    }

    let output = OutputConfig {
        color: config.output.color,
        json: cli.json || config.output.json,
    };
    output.apply_color();

    // Help needs no model, so it works without an API key
    if matches!(cli.command, Some(Command::Help)) {
        println!(
            "{}",
            ConsoleFormatter::render(Panel::Help, &PanelOutput::Help, output.json)
        );
        return Ok(());
    }

    // === Dependency Injection ===
    let client_config = config
        .gemini
        .to_client_config()
        .context("set GEMINI_API_KEY or configure [gemini] api_key_env")?;
    let client = GeminiClient::new(client_config)?;
    let (models, _) = config.models.to_selection();
    info!(
        chat = %models.chat,
        vision = %models.vision,
        embedding = %models.embedding,
        "Models selected"
    );
    let gateway = Arc::new(GeminiModelGateway::new(client, models));

    let conversation_logger: Arc<dyn ConversationLogger> = match cli
        .log_conversation
        .as_ref()
        .or(config.logging.conversation_log.as_ref())
    {
        Some(path) => match JsonlConversationLogger::open(path) {
            Ok(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            Err(e) => {
                warn!("Could not open conversation log {}: {}", path.display(), e);
                Arc::new(NoConversationLogger)
            }
        },
        None => Arc::new(NoConversationLogger),
    };

    let repl_config = ReplConfig {
        show_progress: !cli.quiet && config.repl.show_progress,
        history_file: config.repl.history_file.clone(),
    };
    let busy: Arc<dyn BusyIndicator> = if repl_config.show_progress {
        Arc::new(BusySpinner::new())
    } else {
        Arc::new(NoProgress)
    };

    let (limits, _) = config.limits.to_limits();
    let dispatcher = PanelDispatcher::new(gateway)
        .with_limits(limits)
        .with_busy_indicator(busy)
        .with_conversation_logger(conversation_logger.clone());

    let mut session = AppSession::start_with_logger(conversation_logger);

    let start = match cli.command {
        None => None,
        Some(Command::Chat) => Some(Panel::ChatBot),
        Some(command) => {
            let result = match one_shot_input(command, &dispatcher) {
                Ok(input) => {
                    let panel = input.panel();
                    dispatcher
                        .dispatch(&mut session, input)
                        .await
                        .map(|out| ConsoleFormatter::render(panel, &out, output.json))
                        .map_err(anyhow::Error::from)
                }
                Err(e) => Err(e),
            };
            session.end();
            println!("{}", result?);
            return Ok(());
        }
    };

    let repl = MenuRepl::new(dispatcher, Arc::new(FsImageSource))
        .with_output(output)
        .with_repl_config(&repl_config);

    repl.run(&mut session, start).await?;

    let summary = session.end();
    info!(
        "Session {} ended after {} exchange(s) in {:.1?}",
        summary.session_id, summary.exchanges, summary.duration
    );

    Ok(())
}
