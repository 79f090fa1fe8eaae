//! Port definitions (interfaces for external adapters)

pub mod model_client;
pub mod progress;
