//! Markdown rendering of a recommendation

use super::formatter::AdviceFormatter;
use advisor_domain::{AdviceRecord, AgentSpec, TaskSpec, ToolSpec};
use std::fmt::Write;

/// Four `###` sections (Agents, Tasks, Tools, Workflow), one `####` heading
/// per item.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn agent(out: &mut String, agent: &AgentSpec) {
        let _ = writeln!(out, "#### {}", agent.name);
        let _ = writeln!(out, "**Role:** {}\n", agent.role);
        let _ = writeln!(out, "**Background:** {}\n", agent.background);
        out.push_str("**Goals:**\n");
        Self::bullets(out, &agent.goals);
        out.push('\n');
    }

    fn task(out: &mut String, task: &TaskSpec) {
        let _ = writeln!(out, "#### {}", task.name);
        let _ = writeln!(out, "**Description:** {}\n", task.description);
        let _ = writeln!(out, "**Assigned to:** {}\n", task.agent);
        out.push_str("**Tools:**\n");
        Self::bullets(out, &task.tools);
        out.push('\n');
    }

    fn tool(out: &mut String, tool: &ToolSpec) {
        let _ = writeln!(out, "#### {}", tool.name);
        let _ = writeln!(out, "**Purpose:** {}\n", tool.purpose);
        if !tool.api_requirements.is_empty() {
            out.push_str("**API Requirements:**\n");
            Self::bullets(out, &tool.api_requirements);
        }
        out.push('\n');
    }

    fn bullets(out: &mut String, items: &[String]) {
        for item in items {
            let _ = writeln!(out, "- {}", item);
        }
    }
}

impl AdviceFormatter for MarkdownFormatter {
    fn format(&self, record: &AdviceRecord) -> String {
        let mut out = String::from("### Agents\n\n");
        for agent in &record.agents {
            Self::agent(&mut out, agent);
        }

        out.push_str("\n### Tasks\n\n");
        for task in &record.tasks {
            Self::task(&mut out, task);
        }

        out.push_str("\n### Tools\n\n");
        for tool in &record.tools {
            Self::tool(&mut out, tool);
        }

        out.push_str("\n### Workflow\n\n");
        for (i, step) in record.workflow.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        out
    }
}
