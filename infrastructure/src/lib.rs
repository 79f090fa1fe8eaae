//! Infrastructure layer for heartmend
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig,
    FileOutputConfig,
};
pub use gemini::client::{API_KEY_HEADER, GeminiModelClient};
