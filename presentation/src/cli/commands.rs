//! CLI command definitions

use advisor_domain::{GoalTemplate, Model, ProviderKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown sections
    Markdown,
    /// Coloured terminal layout
    Console,
    /// Indented JSON (the download format)
    Json,
}

impl From<OutputFormat> for advisor_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => advisor_domain::OutputFormat::Markdown,
            OutputFormat::Console => advisor_domain::OutputFormat::Console,
            OutputFormat::Json => advisor_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for crew-advisor
#[derive(Parser, Debug)]
#[command(name = "crew-advisor")]
#[command(author, version, about = "CrewAI project advisor - agents, tasks and tools for your goal")]
#[command(long_about = r#"
crew-advisor asks a chat-completion model (OpenAI or Azure OpenAI) how to
staff a CrewAI project: which agents to create, what tasks they perform,
which tools they need and in what order the work should run.

Give a goal (or a template) for a single recommendation, or start without
one for the interactive prompt.

Configuration files are loaded from (in priority order):
1. --config <path>              Explicit config file
2. ./crew-advisor.toml          Project-level config
3. ~/.config/crew-advisor/config.toml   Global config

The API key falls back to OPENAI_API_KEY or AZURE_OPENAI_API_KEY, and the
Azure endpoint to AZURE_OPENAI_ENDPOINT.

Example:
  crew-advisor "Monitor competitor pricing and summarise changes weekly"
  crew-advisor --template web-scraping --output json --download plan.json
  crew-advisor --provider azure --model gpt-4 --endpoint https://contoso.openai.azure.com
"#)]
pub struct Cli {
    /// The project goal (starts the interactive prompt when omitted)
    pub goal: Option<String>,

    /// Use a built-in goal: web-scraping, content-creation, market-analysis
    #[arg(short, long, value_name = "NAME", conflicts_with = "goal")]
    pub template: Option<GoalTemplate>,

    /// Completion API: openai or azure
    #[arg(short, long, value_name = "KIND")]
    pub provider: Option<ProviderKind>,

    /// Model (Azure: deployment) name
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<Model>,

    /// Azure OpenAI endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also write the recommendation as JSON to this file
    #[arg(short, long, value_name = "PATH")]
    pub download: Option<PathBuf>,

    /// Save the effective provider settings as the default
    #[arg(long)]
    pub save_default: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append request/response events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Goal text for a one-shot run, if any
    pub fn one_shot_goal(&self) -> Option<String> {
        self.goal
            .clone()
            .or_else(|| self.template.map(|t| t.goal_text().to_string()))
    }
}
