//! The specialist team.
//!
//! - [`identity::AgentIdentity`]: the four fan-out specialists
//! - [`identity::TeamLeader`]: the synthesizing fifth agent
//! - [`outcome::AgentOutcome`] / [`outcome::AgentOutcomeSet`]: fan-out results
//! - [`phase::Phase`]: progress phases of a run
//! - [`run::TeamSummary`] / [`run::TeamRun`]: the terminal artifact of a run

pub mod identity;
pub mod outcome;
pub mod phase;
pub mod run;
