//! Output formatter trait

use super::console::ConsoleFormatter;
use super::export::JsonFormatter;
use super::markdown::MarkdownFormatter;
use advisor_domain::{AdviceRecord, OutputFormat};

/// Renders an [`AdviceRecord`] as text.
///
/// Sections keep the record's order; empty sections still get a header.
pub trait AdviceFormatter: Send + Sync {
    fn format(&self, record: &AdviceRecord) -> String;
}

/// The formatter for a configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn AdviceFormatter> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::Console => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
