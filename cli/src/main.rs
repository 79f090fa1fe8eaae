//! CLI entrypoint for heartmend
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use heartmend_application::RunTeamUseCase;
use heartmend_domain::{OutputFormat, UserInput};
use heartmend_infrastructure::{ConfigLoader, FileConfig, GeminiModelClient};
use heartmend_presentation::{
    Cli, ConsoleFormatter, FeelingsSource, ProgressReporter, SimpleProgress, load_image,
    read_feelings,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is not an error
    let dotenv = dotenvy::dotenv();

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

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        let sources = ConfigLoader::describe_config_sources(cli.config.as_deref());
        println!("{}", sources);
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    let config = apply_overrides(config, &cli);

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Input ===
    let Some(source) =
        FeelingsSource::from_args(cli.feelings.as_deref(), cli.feelings_file.as_deref())
    else {
        bail!("Tell the team how you feel: pass it as an argument or use --feelings-file.");
    };
    let feelings = read_feelings(&source).context("Could not read feelings")?;

    let mut input = UserInput::new(feelings)?;
    if let Some(path) = &cli.image {
        input = input.with_image(load_image(path)?);
    }

    // === Dependency Injection ===
    let provider = config.gemini.to_provider_config();
    if !provider.has_api_key() {
        warn!(
            "No API key found in {}; requests will be rejected",
            config.gemini.api_key_env
        );
    }
    let client = Arc::new(GeminiModelClient::new(provider)?);
    info!("Using model {} at {}", client.model(), client.endpoint());

    let use_case = RunTeamUseCase::new(client);

    // Execute with or without progress reporting
    let run = if cli.quiet {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        let progress = SimpleProgress;
        use_case.execute_with_progress(input, &progress).await?
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    println!("{}", ConsoleFormatter::render(&run, format));

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: FileConfig, cli: &Cli) -> FileConfig {
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    config
}
