//! REPL (Read-Eval-Print Loop) for interactive advice sessions

use crate::output::export::{DEFAULT_DOWNLOAD_NAME, write_json};
use crate::output::formatter::AdviceFormatter;
use crate::output::markdown::MarkdownFormatter;
use crate::output::report::{ABOUT, TIPS, render_error, render_history, render_settings};
use crate::progress::reporter::ProgressReporter;
use advisor_application::{AdvisorSession, NoProgress, RequestAdviceUseCase, SettingsStore};
use advisor_domain::{GoalTemplate, Model, ProviderKind};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Templates,
    Template(GoalTemplate),
    Provider(ProviderKind),
    Model(Model),
    Models,
    Key(String),
    Endpoint(Option<String>),
    SaveDefault,
    Settings,
    History,
    Export(Option<PathBuf>),
    Tips,
    About,
    Quit,
    /// Anything that is not a command
    Goal(String),
}

impl ReplCommand {
    /// Parse one input line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Ok(ReplCommand::Goal(line.to_string()));
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let required = |usage: &str| {
            if arg.is_empty() {
                Err(format!("Usage: {}", usage))
            } else {
                Ok(arg)
            }
        };

        match cmd {
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/templates" => Ok(ReplCommand::Templates),
            "/template" => required("/template <name>")?
                .parse()
                .map(ReplCommand::Template)
                .map_err(|e| format!("{}", e)),
            "/provider" => required("/provider <openai|azure>")?
                .parse()
                .map(ReplCommand::Provider)
                .map_err(|e| format!("{}", e)),
            "/model" => Ok(ReplCommand::Model(Model::from(required("/model <name>")?))),
            "/models" => Ok(ReplCommand::Models),
            "/key" => Ok(ReplCommand::Key(required("/key <api key>")?.to_string())),
            "/endpoint" => Ok(ReplCommand::Endpoint(
                (!arg.is_empty()).then(|| arg.to_string()),
            )),
            "/save-default" => Ok(ReplCommand::SaveDefault),
            "/settings" => Ok(ReplCommand::Settings),
            "/history" => Ok(ReplCommand::History),
            "/export" => Ok(ReplCommand::Export(
                (!arg.is_empty()).then(|| PathBuf::from(arg)),
            )),
            "/tips" => Ok(ReplCommand::Tips),
            "/about" => Ok(ReplCommand::About),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            other => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                other
            )),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Submit(String),
    Quit,
}

/// Interactive advisor REPL
pub struct AdvisorRepl {
    use_case: RequestAdviceUseCase,
    session: AdvisorSession,
    settings_store: Arc<dyn SettingsStore>,
    formatter: Box<dyn AdviceFormatter>,
    show_progress: bool,
}

impl AdvisorRepl {
    pub fn new(
        use_case: RequestAdviceUseCase,
        session: AdvisorSession,
        settings_store: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            use_case,
            session,
            settings_store,
            formatter: Box::new(MarkdownFormatter),
            show_progress: true,
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn AdviceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn session(&self) -> &AdvisorSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = Self::history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Line history disabled: {}", e),
            }
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("crew-advisor".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            if line.trim().is_empty() {
                continue;
            }

            match ReplCommand::parse(&line) {
                Ok(command) => match self.handle_command(command) {
                    Flow::Continue(text) => print!("{}", text),
                    Flow::Submit(goal) => self.submit(&goal).await,
                    Flow::Quit => {
                        println!("Bye!");
                        break;
                    }
                },
                Err(message) => println!("{}", message.yellow()),
            }
        }

        Ok(())
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("crew-advisor").join("history.txt"))
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            CrewAI Project Advisor           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Provider: {}  Model: {}",
            self.session.settings().kind.display_name(),
            self.session.settings().model
        );
        if !self.session.settings().has_credential() {
            println!(
                "{}",
                "No API key configured. Set one with /key <api key>.".yellow()
            );
        }
        println!("Describe your project goal, or type /help for commands.");
        println!();
    }

    fn help() -> String {
        "\
Commands:
  /help                 Show this help
  /templates            List goal templates
  /template <name>      Submit a template's goal
  /provider <kind>      Switch API type (openai, azure)
  /model <name>         Use a model for this session
  /models               List suggested models
  /key <api key>        Use an API key for this session
  /endpoint [url]       Set (or clear) the Azure endpoint
  /save-default         Save current settings as the default
  /settings             Show current settings
  /history              Show recent recommendations
  /export [path]        Download the last recommendation as JSON
  /tips                 Tips for better results
  /about                About CrewAI
  /quit                 Exit
Anything else is submitted as a goal.
"
        .to_string()
    }

    /// Apply a command to the session. Goal submissions are returned as
    /// [`Flow::Submit`] for the caller to await.
    pub fn handle_command(&mut self, command: ReplCommand) -> Flow {
        match command {
            ReplCommand::Help => Flow::Continue(Self::help()),
            ReplCommand::Quit => Flow::Quit,
            ReplCommand::Goal(goal) => Flow::Submit(goal),
            ReplCommand::Templates => {
                let mut out = String::from("Templates:\n");
                for template in GoalTemplate::all() {
                    out.push_str(&format!("  {:<18} {}\n", template.slug(), template.label()));
                }
                Flow::Continue(out)
            }
            ReplCommand::Template(GoalTemplate::Custom) => Flow::Continue(
                "The Custom template has no text. Type your goal instead.\n".to_string(),
            ),
            ReplCommand::Template(template) => {
                println!("{} {}", "Goal:".bold(), template.goal_text());
                Flow::Submit(template.goal_text().to_string())
            }
            ReplCommand::Provider(kind) => {
                self.session.set_provider(kind);
                Flow::Continue(format!(
                    "API type set to {} (model {}).\n",
                    kind.display_name(),
                    self.session.settings().model
                ))
            }
            ReplCommand::Model(model) => {
                let custom = model.is_custom();
                self.session.set_model(model);
                let mut out = format!("Model set to {}.\n", self.session.settings().model);
                if custom {
                    out.push_str("(not in the suggested list; sent as given)\n");
                }
                Flow::Continue(out)
            }
            ReplCommand::Models => {
                let settings = self.session.settings();
                let mut out = format!("Models for {}:\n", settings.kind.display_name());
                for model in settings.kind.available_models() {
                    let mark = if model == settings.model { "*" } else { " " };
                    out.push_str(&format!("  {} {}\n", mark, model));
                }
                Flow::Continue(out)
            }
            ReplCommand::Key(key) => {
                self.session.set_credential(key);
                Flow::Continue("Settings saved for this session!\n".to_string())
            }
            ReplCommand::Endpoint(endpoint) => {
                self.session.set_endpoint(endpoint);
                let shown = self
                    .session
                    .settings()
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| "(default)".to_string());
                Flow::Continue(format!("Endpoint set to {} for this session.\n", shown))
            }
            ReplCommand::SaveDefault => match self.settings_store.save(self.session.settings()) {
                Ok(path) => Flow::Continue(format!(
                    "Settings saved as default! ({})\n",
                    path.display()
                )),
                Err(e) => Flow::Continue(format!("Error saving settings: {}\n", e)),
            },
            ReplCommand::Settings => Flow::Continue(render_settings(
                self.session.settings(),
                self.settings_store.target().as_deref(),
            )),
            ReplCommand::History => Flow::Continue(render_history(
                self.session.history(),
                self.formatter.as_ref(),
            )),
            ReplCommand::Export(path) => {
                let Some(record) = self.session.last_advice() else {
                    return Flow::Continue("Nothing to export yet.\n".to_string());
                };
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_NAME));
                match write_json(record, &path) {
                    Ok(path) => Flow::Continue(format!("Saved to {}\n", path.display())),
                    Err(e) => Flow::Continue(format!("{}\n", e)),
                }
            }
            ReplCommand::Tips => Flow::Continue(TIPS.to_string()),
            ReplCommand::About => Flow::Continue(ABOUT.to_string()),
        }
    }

    async fn submit(&mut self, goal: &str) {
        println!();
        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute(&mut self.session, goal, &progress)
                .await
        } else {
            self.use_case
                .execute(&mut self.session, goal, &NoProgress)
                .await
        };

        match result {
            Ok(outcome) => {
                println!("{}", "Here are your CrewAI recommendations:".green().bold());
                println!("{}", self.formatter.format(&outcome.record));
                println!(
                    "{}",
                    format!("Download with /export [{}]", DEFAULT_DOWNLOAD_NAME).dimmed()
                );
            }
            Err(e) => eprint!("{}", render_error(&e)),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_application::{
        ChatCompletionRequest, ConfigPersistError, GatewayError, LlmGateway,
    };
    use advisor_domain::{AdviceRecord, Goal, ProviderSettings};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Unreachable;

    #[async_trait]
    impl LlmGateway for Unreachable {
        async fn complete(
            &self,
            _settings: &ProviderSettings,
            _request: &ChatCompletionRequest,
        ) -> Result<String, GatewayError> {
            Err(GatewayError::ConnectionError("offline".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<ProviderSettings>>,
    }

    impl SettingsStore for MemoryStore {
        fn save(&self, settings: &ProviderSettings) -> Result<PathBuf, ConfigPersistError> {
            self.saved.lock().unwrap().push(settings.clone());
            Ok(PathBuf::from("memory.toml"))
        }

        fn target(&self) -> Option<PathBuf> {
            Some(PathBuf::from("memory.toml"))
        }
    }

    fn repl(store: Arc<MemoryStore>) -> AdvisorRepl {
        AdvisorRepl::new(
            RequestAdviceUseCase::new(Arc::new(Unreachable)),
            AdvisorSession::new(ProviderSettings::default()),
            store,
        )
        .with_progress(false)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Ok(ReplCommand::Help));
        assert_eq!(
            ReplCommand::parse("/provider azure"),
            Ok(ReplCommand::Provider(ProviderKind::Azure))
        );
        assert_eq!(
            ReplCommand::parse("/model   gpt-4 "),
            Ok(ReplCommand::Model(Model::Gpt4))
        );
        assert_eq!(
            ReplCommand::parse("/template content-creation"),
            Ok(ReplCommand::Template(GoalTemplate::ContentCreation))
        );
        assert_eq!(ReplCommand::parse("/export"), Ok(ReplCommand::Export(None)));
        assert_eq!(
            ReplCommand::parse("/export out/plan.json"),
            Ok(ReplCommand::Export(Some(PathBuf::from("out/plan.json"))))
        );
        assert_eq!(ReplCommand::parse("/endpoint"), Ok(ReplCommand::Endpoint(None)));
    }

    #[test]
    fn test_parse_goal_and_errors() {
        assert_eq!(
            ReplCommand::parse("  Build a research crew  "),
            Ok(ReplCommand::Goal("Build a research crew".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/key"),
            Err("Usage: /key <api key>".to_string())
        );
        assert!(ReplCommand::parse("/provider bedrock").is_err());
        assert!(ReplCommand::parse("/frobnicate").unwrap_err().contains("Unknown command"));
    }

    #[test]
    fn test_settings_commands_update_session() {
        let store = Arc::new(MemoryStore::default());
        let mut repl = repl(store.clone());

        repl.handle_command(ReplCommand::Key("sk-session".to_string()));
        repl.handle_command(ReplCommand::Provider(ProviderKind::Azure));
        repl.handle_command(ReplCommand::Endpoint(Some(
            "https://contoso.openai.azure.com".to_string(),
        )));

        let settings = repl.session().settings();
        assert_eq!(settings.kind, ProviderKind::Azure);
        assert_eq!(settings.model, Model::AzureGpt35Turbo);
        assert_eq!(settings.api_key, "sk-session");

        let flow = repl.handle_command(ReplCommand::SaveDefault);
        assert_eq!(
            flow,
            Flow::Continue("Settings saved as default! (memory.toml)\n".to_string())
        );
        assert_eq!(
            store.saved.lock().unwrap()[0].endpoint.as_deref(),
            Some("https://contoso.openai.azure.com")
        );
    }

    #[test]
    fn test_template_submits_goal_text() {
        let mut repl = repl(Arc::new(MemoryStore::default()));
        assert_eq!(
            repl.handle_command(ReplCommand::Template(GoalTemplate::WebScraping)),
            Flow::Submit(GoalTemplate::WebScraping.goal_text().to_string())
        );
        assert!(matches!(
            repl.handle_command(ReplCommand::Template(GoalTemplate::Custom)),
            Flow::Continue(_)
        ));
    }

    #[test]
    fn test_export_needs_a_recommendation() {
        let mut repl = repl(Arc::new(MemoryStore::default()));
        assert_eq!(
            repl.handle_command(ReplCommand::Export(None)),
            Flow::Continue("Nothing to export yet.\n".to_string())
        );
    }

    #[test]
    fn test_export_writes_last_advice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        let mut repl = repl(Arc::new(MemoryStore::default()));
        let advice = AdviceRecord {
            agents: vec![],
            tasks: vec![],
            tools: vec![],
            workflow: vec!["step1".to_string()],
        };
        repl.session
            .record(Goal::new("Automate weekly reports").unwrap(), advice.clone());

        let flow = repl.handle_command(ReplCommand::Export(Some(path.clone())));
        assert!(matches!(flow, Flow::Continue(ref text) if text.starts_with("Saved to")));
        let written: AdviceRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, advice);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_repl_usable() {
        let mut repl = repl(Arc::new(MemoryStore::default()));
        repl.handle_command(ReplCommand::Key("sk-session".to_string()));
        repl.submit("Plan a marketing campaign").await;
        assert!(repl.session().history().is_empty());
        assert_eq!(repl.handle_command(ReplCommand::Quit), Flow::Quit);
    }
}
