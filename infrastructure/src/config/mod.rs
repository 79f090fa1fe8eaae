//! Configuration file loading for heartmend
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HEARTMEND_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./heartmend.toml` or `./.heartmend.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/heartmend/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig};
pub use loader::{ConfigError, ConfigLoader};
