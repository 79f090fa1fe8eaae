//! Prompt domain
//!
//! System instructions for every agent and the team leader's composite prompt.

pub mod agent;
mod template;

pub use agent::AgentPromptTemplate;
pub use template::{NO_RESPONSE_PLACEHOLDER, PromptTemplate};
