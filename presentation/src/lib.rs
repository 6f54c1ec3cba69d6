//! Presentation layer for crew-advisor
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive prompt.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::AdvisorRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::export::{DEFAULT_DOWNLOAD_NAME, ExportError, to_json_bytes, write_json};
pub use output::formatter::{AdviceFormatter, formatter_for};
pub use output::markdown::MarkdownFormatter;
pub use output::report::{render_error, render_settings};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
