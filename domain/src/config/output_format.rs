//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished run is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every specialist's answer followed by the team summary (default)
    Full,
    /// Only the team leader's summary
    Summary,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
