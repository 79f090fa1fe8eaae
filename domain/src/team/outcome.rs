//! Fan-out outcomes

use super::identity::AgentIdentity;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of one specialist invocation (Value Object)
///
/// Exactly one of `output` / `error` is meaningful: a failure carries an empty
/// output and an error description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOutcome {
    /// Display name of the agent that produced this outcome
    pub name: String,
    /// Generated text (empty on failure)
    pub output: String,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentOutcome {
    pub fn success(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            error: None,
        }
    }

    /// A contained failure. An empty description is replaced so that a
    /// failed outcome always explains itself.
    pub fn failure(name: impl Into<String>, error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            "Unknown error occurred".to_string()
        } else {
            error
        };
        Self {
            name: name.into(),
            output: String::new(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The output, or `None` when there is nothing usable to show.
    pub fn usable_output(&self) -> Option<&str> {
        if self.output.is_empty() {
            None
        } else {
            Some(&self.output)
        }
    }
}

/// Outcomes of a fan-out, keyed by identity
///
/// Each slot is written exactly once. Iteration always follows
/// [`AgentIdentity::ALL`] order, whatever order the outcomes arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentOutcomeSet {
    slots: BTreeMap<AgentIdentity, AgentOutcome>,
}

impl AgentOutcomeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slot for `identity`.
    ///
    /// Fails if the slot already holds an outcome; the existing one is kept.
    pub fn record(
        &mut self,
        identity: AgentIdentity,
        outcome: AgentOutcome,
    ) -> Result<(), DomainError> {
        if self.slots.contains_key(&identity) {
            let name = identity.display_name().to_string();
            return Err(DomainError::OutcomeAlreadyRecorded(name));
        }
        self.slots.insert(identity, outcome);
        Ok(())
    }

    pub fn get(&self, identity: AgentIdentity) -> Option<&AgentOutcome> {
        self.slots.get(&identity)
    }

    /// True once every fan-out identity has an outcome.
    pub fn is_complete(&self) -> bool {
        AgentIdentity::ALL
            .iter()
            .all(|identity| self.slots.contains_key(identity))
    }

    /// Identities still waiting for an outcome.
    pub fn missing(&self) -> Vec<AgentIdentity> {
        AgentIdentity::ALL
            .into_iter()
            .filter(|identity| !self.slots.contains_key(identity))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentIdentity, &AgentOutcome)> {
        self.slots
            .iter()
            .map(|(identity, outcome)| (*identity, outcome))
    }

    pub fn successful(&self) -> impl Iterator<Item = (AgentIdentity, &AgentOutcome)> {
        self.iter().filter(|(_, outcome)| outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = (AgentIdentity, &AgentOutcome)> {
        self.iter().filter(|(_, outcome)| !outcome.is_success())
    }
}
