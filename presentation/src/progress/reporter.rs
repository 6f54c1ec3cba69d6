//! Progress reporting while a recommendation is being generated

use advisor_application::ports::progress::AdviceProgressNotifier;
use advisor_domain::ProviderKind;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown for the duration of the request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub(crate) fn message(model: &str) -> String {
        format!("Consulting with {} for CrewAI recommendations...", model)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceProgressNotifier for ProgressReporter {
    fn on_request_start(&self, _provider: ProviderKind, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::message(model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner), written to stderr
pub struct SimpleProgress;

impl AdviceProgressNotifier for SimpleProgress {
    fn on_request_start(&self, provider: ProviderKind, model: &str) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::message(model),
            provider.display_name()
        );
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            eprintln!("  {} response received", "v".green());
        } else {
            eprintln!("  {} request failed", "x".red());
        }
    }
}
