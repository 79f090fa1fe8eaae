//! Rendering preferences shared by the config loader and the CLI

mod output_format;

pub use output_format::OutputFormat;
