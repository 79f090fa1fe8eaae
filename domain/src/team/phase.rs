//! Phases of a team run

use serde::{Deserialize, Serialize};

/// Phase of a team run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// All four specialists answer concurrently
    FanOut,
    /// The team leader merges the specialist answers
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::FanOut => "fan_out",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::FanOut => "Specialists",
            Phase::Synthesis => "Team Leader",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
