//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a team run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every specialist followed by the team summary
    Full,
    /// Only the team leader's summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for heartmend_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for heartmend
#[derive(Parser, Debug)]
#[command(name = "heartmend")]
#[command(author, version, about = "A team of AI specialists to help you through a breakup")]
#[command(long_about = r#"
heartmend sends what you are feeling to four specialists at once:

  Therapist Agent         empathetic support
  Closure Agent           the message you never sent
  Routine Planner Agent   a 7-day recovery plan
  Brutal Honesty Agent    objective feedback

A Team Leader then merges their answers into one piece of advice.
A screenshot of the chat can be attached with --image.

Configuration files are loaded from (in priority order):
1. HEARTMEND_* environment variables
2. --config <path>         Explicit config file
3. ./heartmend.toml        Project-level config
4. ~/.config/heartmend/config.toml   Global config

The API key is read from GEMINI_API_KEY unless configured otherwise.

Example:
  heartmend "We broke up last week and I can't stop checking their profile"
  heartmend --image chat.png -o summary "This was our last conversation"
  echo "..." | heartmend --feelings-file -
"#)]
pub struct Cli {
    /// What you are feeling (or use --feelings-file)
    pub feelings: Option<String>,

    /// Read feelings from a file ("-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "feelings")]
    pub feelings_file: Option<PathBuf>,

    /// Screenshot of the conversation (PNG or JPEG)
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Output format (defaults to the configured format, else full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Model to use for every agent (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
