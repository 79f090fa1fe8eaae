//! Presentation layer for heartmend
//!
//! This crate contains CLI definitions, input loading, output formatters
//! and progress reporters.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::{
    FeelingsSource, ImageLoadError, load_image, read_feelings, read_feelings_from,
};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
