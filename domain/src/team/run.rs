//! Terminal artifacts of a team run

use super::outcome::AgentOutcomeSet;
use serde::{Deserialize, Serialize};

/// The team leader's final message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamSummary(String);

impl TeamSummary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TeamSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete result of one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRun {
    /// The original feelings text
    pub feelings: String,
    /// Whether a screenshot was forwarded to the specialists
    pub had_image: bool,
    /// Fan-out results, one per specialist
    pub outcomes: AgentOutcomeSet,
    /// Team leader synthesis
    pub summary: TeamSummary,
}

impl TeamRun {
    pub fn new(
        feelings: impl Into<String>,
        had_image: bool,
        outcomes: AgentOutcomeSet,
        summary: TeamSummary,
    ) -> Self {
        Self {
            feelings: feelings.into(),
            had_image,
            outcomes,
            summary,
        }
    }

    /// Number of specialists that failed and were replaced by a placeholder.
    pub fn failed_count(&self) -> usize {
        self.outcomes.failed().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::identity::AgentIdentity;
    use crate::team::outcome::AgentOutcome;

    #[test]
    fn test_summary_serializes_as_plain_string() {
        let json = serde_json::to_string(&TeamSummary::new("Be kind to yourself.")).unwrap();
        assert_eq!(json, "\"Be kind to yourself.\"");
    }

    #[test]
    fn test_failed_count() {
        let mut outcomes = AgentOutcomeSet::new();
        let hi = AgentOutcome::success("Therapist Agent", "hi");
        let boom = AgentOutcome::failure("Closure Agent", "boom");
        outcomes.record(AgentIdentity::Therapist, hi).unwrap();
        outcomes.record(AgentIdentity::Closure, boom).unwrap();
        let run = TeamRun::new("sad", false, outcomes, TeamSummary::new("ok"));
        assert_eq!(run.failed_count(), 1);
    }
}
