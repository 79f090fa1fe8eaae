//! Reading the feelings text

use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the feelings text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeelingsSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl FeelingsSource {
    /// Pick the source from the positional argument and `--feelings-file`.
    pub fn from_args(inline: Option<&str>, file: Option<&Path>) -> Option<Self> {
        match (inline, file) {
            (Some(text), _) => Some(Self::Inline(text.to_string())),
            (None, Some(path)) if path == Path::new("-") => Some(Self::Stdin),
            (None, Some(path)) => Some(Self::File(path.to_path_buf())),
            (None, None) => None,
        }
    }
}

/// Load the raw feelings text. Emptiness is checked by `UserInput::new`.
pub fn read_feelings(source: &FeelingsSource) -> std::io::Result<String> {
    read_feelings_from(source, std::io::stdin())
}

/// Like [`read_feelings`], with `stdin` standing in for standard input.
///
/// The reader is only consumed for [`FeelingsSource::Stdin`].
pub fn read_feelings_from(
    source: &FeelingsSource,
    mut stdin: impl Read,
) -> std::io::Result<String> {
    match source {
        FeelingsSource::Inline(text) => Ok(text.clone()),
        FeelingsSource::File(path) => std::fs::read_to_string(path),
        FeelingsSource::Stdin => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
