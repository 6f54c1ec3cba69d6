//! CLI entrypoint for crew-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::{AdvisorSession, NoProgress, RequestAdviceUseCase, SettingsStore};
use advisor_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, RoutingGateway, TomlSettingsStore,
};
use advisor_presentation::{
    AdviceFormatter, AdvisorRepl, Cli, ConsoleFormatter, ProgressReporter, SimpleProgress,
    formatter_for, render_error, render_settings, write_json,
};
use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting crew-advisor");

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    // Session settings: config first, then command-line overrides
    let mut session = AdvisorSession::new(config.provider_settings());
    if let Some(kind) = cli.provider {
        session.set_provider(kind);
    }
    if let Some(model) = cli.model.clone() {
        session.set_model(model);
    }
    if let Some(endpoint) = cli.endpoint.clone() {
        session.set_endpoint(Some(endpoint));
    }

    let settings_store = Arc::new(TomlSettingsStore::for_target(cli.config.as_deref()));

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        println!();
        print!(
            "{}",
            render_settings(session.settings(), settings_store.target().as_deref())
        );
        return Ok(());
    }

    if cli.save_default {
        let path = settings_store.save(session.settings())?;
        println!("Settings saved as default! ({})", path.display());
    }

    ConsoleFormatter::set_color(config.output.color);
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let mut use_case = RequestAdviceUseCase::new(Arc::new(RoutingGateway::with_default_adapters()));
    if let Some(path) = &cli.log_file {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Logging conversation to {}", logger.path().display());
                use_case = use_case.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Could not open log file {}", path.display()),
        }
    }

    let Some(goal) = cli.one_shot_goal() else {
        if cli.save_default {
            return Ok(());
        }
        let mut repl = AdvisorRepl::new(use_case, session, settings_store)
            .with_formatter(formatter_for(format))
            .with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    };

    let result = if cli.quiet {
        use_case.execute(&mut session, &goal, &NoProgress).await
    } else if cli.verbose > 0 {
        // Log lines would tear through a spinner
        use_case.execute(&mut session, &goal, &SimpleProgress).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute(&mut session, &goal, &progress).await
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprint!("{}", render_error(&e));
            bail!("{}", e);
        }
    };

    println!("{}", formatter_for(format).format(&outcome.record));

    if let Some(path) = &cli.download {
        let written = write_json(&outcome.record, path)?;
        if !cli.quiet {
            eprintln!("Saved to {}", written.display());
        }
    }

    Ok(())
}
