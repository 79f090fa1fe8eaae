//! Domain layer for heartmend
//!
//! This crate contains the value objects that describe one submission to the
//! specialist team and everything it produces. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Specialists**: four fixed agents ([`AgentIdentity`]) that each answer
//!   the same [`UserInput`] independently
//! - **Team leader**: a fifth agent ([`TeamLeader`]) that merges the four
//!   answers into one [`TeamSummary`]
//! - **Contained failure**: a specialist that fails is recorded as data in
//!   its [`AgentOutcome`] instead of aborting the run

pub mod config;
pub mod core;
pub mod input;
pub mod prompt;
pub mod providers;
pub mod team;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use input::{
    ImageAttachment, SUPPORTED_IMAGE_MIME_TYPES, UserInput, encode_base64, extract_base64_data,
    is_supported_image_mime,
};
pub use prompt::{AgentPromptTemplate, NO_RESPONSE_PLACEHOLDER, PromptTemplate};
pub use providers::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiProviderConfig};
pub use team::{
    identity::{AgentIdentity, TeamLeader},
    outcome::{AgentOutcome, AgentOutcomeSet},
    phase::Phase,
    run::{TeamRun, TeamSummary},
};
