//! Application layer for heartmend
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    model_client::{ModelClient, ModelClientError, NO_RESPONSE_RECEIVED},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::{
    agent_runner::AgentRunner,
    fan_out::FanOutOrchestrator,
    run_team::{RunTeamError, RunTeamUseCase},
    synthesis::{SynthesisError, SynthesisStep},
};
