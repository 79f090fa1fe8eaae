//! Gemini `generateContent` adapter
//!
//! - [`types`]: strongly-typed request/response schema
//! - [`client::GeminiModelClient`]: reqwest implementation of `ModelClient`

pub mod client;
pub mod types;
