//! Spinner shown while a gateway call is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use intelli_application::BusyIndicator;
use intelli_domain::Panel;
use std::sync::Mutex;
use std::time::Duration;

/// indicatif spinner implementing [`BusyIndicator`]
pub struct BusySpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl BusySpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Message shown while `panel` waits for the model
    pub fn busy_message(panel: Panel) -> &'static str {
        match panel {
            Panel::ChatBot => "Generating response...",
            Panel::ImageCaptioning => "Generating caption...",
            Panel::EmbedText => "Generating embeddings...",
            Panel::AskAnything => "Generating answer...",
            Panel::CodingAssistant => "Generating code...",
            Panel::SentimentAnalysis => "Analyzing sentiment...",
            Panel::SummarizeText => "Summarizing text...",
            Panel::Help => "Loading...",
        }
    }
}

impl Default for BusySpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator for BusySpinner {
    fn on_busy_start(&self, panel: Panel) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(Self::busy_message(panel));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_busy_end(&self, _panel: Panel, success: bool) {
        let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_and_clear();
        } else {
            pb.abandon_with_message(format!("{}", "failed".red()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_end_pairs() {
        let spinner = BusySpinner::new();
        spinner.on_busy_start(Panel::ChatBot);
        assert!(spinner.bar.lock().unwrap().is_some());
        spinner.on_busy_end(Panel::ChatBot, true);
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_end_without_start_is_harmless() {
        BusySpinner::new().on_busy_end(Panel::EmbedText, false);
    }

    #[test]
    fn test_messages_match_panels() {
        assert_eq!(
            BusySpinner::busy_message(Panel::SummarizeText),
            "Summarizing text..."
        );
    }
}
