//! Console output formatter for recommendations

use super::formatter::AdviceFormatter;
use advisor_domain::AdviceRecord;
use colored::Colorize;

/// Formats recommendations for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Apply the configured colour setting to everything written through
    /// `colored`. `false` forces plain text; `true` keeps terminal detection,
    /// so piped output stays free of escape codes.
    pub fn set_color(enabled: bool) {
        match Self::color_override(enabled) {
            Some(forced) => colored::control::set_override(forced),
            None => colored::control::unset_override(),
        }
    }

    fn color_override(enabled: bool) -> Option<bool> {
        (!enabled).then_some(false)
    }

    pub fn header(title: &str) -> String {
        let line = "═".repeat(60);
        format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    pub fn footer() -> String {
        format!("\n{}\n", "─".repeat(60).dimmed())
    }

    fn list(out: &mut String, label: &str, items: &[String]) {
        out.push_str(&format!("  {}\n", label.cyan()));
        for item in items {
            out.push_str(&format!("    * {}\n", item));
        }
    }
}

impl AdviceFormatter for ConsoleFormatter {
    fn format(&self, record: &AdviceRecord) -> String {
        let mut out = Self::header("CrewAI Recommendations");

        out.push_str(&Self::section_header("Agents"));
        for agent in &record.agents {
            out.push_str(&format!("\n{}\n", agent.name.green().bold()));
            out.push_str(&format!("  {} {}\n", "Role:".cyan(), agent.role));
            out.push_str(&format!("  {} {}\n", "Background:".cyan(), agent.background));
            Self::list(&mut out, "Goals:", &agent.goals);
        }

        out.push_str(&Self::section_header("Tasks"));
        for task in &record.tasks {
            out.push_str(&format!("\n{}\n", task.name.green().bold()));
            out.push_str(&format!("  {} {}\n", "Description:".cyan(), task.description));
            out.push_str(&format!("  {} {}\n", "Assigned to:".cyan(), task.agent));
            Self::list(&mut out, "Tools:", &task.tools);
        }

        out.push_str(&Self::section_header("Tools"));
        for tool in &record.tools {
            out.push_str(&format!("\n{}\n", tool.name.green().bold()));
            out.push_str(&format!("  {} {}\n", "Purpose:".cyan(), tool.purpose));
            if !tool.api_requirements.is_empty() {
                Self::list(&mut out, "API Requirements:", &tool.api_requirements);
            }
        }

        out.push_str(&Self::section_header("Workflow"));
        out.push('\n');
        for (i, step) in record.workflow.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }

        out.push_str(&Self::footer());
        out
    }
}
