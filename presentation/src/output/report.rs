//! Text blocks shared by the one-shot command and the interactive prompt

use super::formatter::AdviceFormatter;
use advisor_application::{AdviceError, HistoryStore};
use advisor_domain::{ProviderKind, ProviderSettings};
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

/// Diagnostic for a failed submission, followed by the raw model output
/// when the request itself succeeded.
pub fn render_error(error: &AdviceError) -> String {
    let mut out = format!("{}\n", error.diagnostic().red());
    if let Some(raw) = error.raw_response() {
        let _ = write!(out, "\n{}\n{}\n", "Raw response:".yellow().bold(), raw);
    }
    out
}

/// The five most recent recommendations, newest first.
pub fn render_history(history: &HistoryStore, formatter: &dyn AdviceFormatter) -> String {
    if history.is_empty() {
        return "No recommendations yet.\n".to_string();
    }

    let mut out = format!("{}\n", "Previous Recommendations".cyan().bold());
    for entry in history.recent(HistoryStore::DISPLAY_LIMIT) {
        let _ = write!(
            out,
            "\n{}\n{}\n{}\n{}\n{}\n",
            entry.label().yellow().bold(),
            "Goal:".bold(),
            entry.goal,
            "Recommendation:".bold(),
            formatter.format(&entry.advice)
        );
    }
    out
}

/// Current provider settings with the credential masked.
pub fn render_settings(settings: &ProviderSettings, save_target: Option<&Path>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Settings".cyan().bold());
    let _ = writeln!(out, "  API Type:    {}", settings.kind.display_name());
    let _ = writeln!(out, "  Model:       {}", settings.model);
    let wire = settings.wire_model_name();
    if wire != settings.model.as_str() {
        let _ = writeln!(out, "  Sent as:     {}", wire);
    }
    let _ = writeln!(out, "  API Key:     {}", settings.masked_api_key());
    if settings.kind == ProviderKind::Azure {
        let _ = writeln!(
            out,
            "  Endpoint:    {}",
            settings.endpoint.as_deref().unwrap_or("(default)")
        );
        let _ = writeln!(out, "  API Version: {}", settings.api_version);
    }
    if let Some(path) = save_target {
        let _ = writeln!(out, "  Defaults:    {}", path.display());
    }
    out
}

pub const TIPS: &str = "\
When describing your goal, try to include:
  - The main objective
  - Required data sources
  - Expected outputs
  - Any specific constraints
";

pub const ABOUT: &str = "\
CrewAI is a framework for orchestrating role-playing AI agents. It enables:
  - Multi-agent collaboration
  - Task delegation
  - Complex workflow automation
";
