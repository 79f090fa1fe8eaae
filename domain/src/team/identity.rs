//! Agent identities

use crate::prompt::AgentPromptTemplate;
use serde::{Deserialize, Serialize};

/// One of the four specialists dispatched during fan-out (Value Object)
///
/// Each identity is bound to a fixed system instruction and display name.
/// The team leader is deliberately not a variant: it never takes part in
/// fan-out and is invoked exactly once, afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentIdentity {
    Therapist,
    Closure,
    Routine,
    Honesty,
}

impl AgentIdentity {
    /// Every fan-out identity, in presentation order.
    pub const ALL: [AgentIdentity; 4] = [
        AgentIdentity::Therapist,
        AgentIdentity::Closure,
        AgentIdentity::Routine,
        AgentIdentity::Honesty,
    ];

    /// Stable key used in JSON output and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentIdentity::Therapist => "therapist",
            AgentIdentity::Closure => "closure",
            AgentIdentity::Routine => "routine",
            AgentIdentity::Honesty => "honesty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentIdentity::Therapist => "Therapist Agent",
            AgentIdentity::Closure => "Closure Agent",
            AgentIdentity::Routine => "Routine Planner Agent",
            AgentIdentity::Honesty => "Brutal Honesty Agent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AgentIdentity::Therapist => "🧠",
            AgentIdentity::Closure => "💌",
            AgentIdentity::Routine => "📅",
            AgentIdentity::Honesty => "🔥",
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        AgentPromptTemplate::system_instruction(*self)
    }
}

impl std::fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for AgentIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "therapist" => Ok(AgentIdentity::Therapist),
            "closure" => Ok(AgentIdentity::Closure),
            "routine" => Ok(AgentIdentity::Routine),
            "honesty" => Ok(AgentIdentity::Honesty),
            other => Err(format!("unknown agent '{}'", other)),
        }
    }
}

/// The synthesizing agent that runs once after fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamLeader;

impl TeamLeader {
    pub const DISPLAY_NAME: &'static str = "Team Leader";
    pub const ICON: &'static str = "⭐";

    pub fn system_instruction() -> &'static str {
        AgentPromptTemplate::team_leader_system()
    }
}
