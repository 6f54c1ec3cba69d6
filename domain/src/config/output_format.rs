//! Output format value object

use serde::{Deserialize, Serialize};

/// How a recommendation is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored sections for a terminal (default)
    #[default]
    Console,
    /// Plain Markdown, suitable for piping into a file
    Markdown,
    /// The indented JSON record
    Json,
}
