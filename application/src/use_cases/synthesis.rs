//! Synthesis Step
//!
//! Merges the four specialist outcomes into one team summary.

use crate::ports::model_client::{ModelClient, ModelClientError};
use heartmend_domain::{AgentIdentity, AgentOutcomeSet, PromptTemplate, TeamLeader, TeamSummary};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during synthesis
///
/// Unlike specialist failures these are not contained: there is no useful
/// result once fan-out is done but the team leader could not answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Team Leader called before all specialists finished (missing: {})", format_missing(.0))]
    IncompleteOutcomes(Vec<AgentIdentity>),

    #[error("Team Leader failed: {0}")]
    ModelCall(#[from] ModelClientError),
}

fn format_missing(missing: &[AgentIdentity]) -> String {
    missing
        .iter()
        .map(|identity| identity.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the team leader once over a complete outcome set
pub struct SynthesisStep<C: ModelClient + 'static> {
    client: Arc<C>,
}

impl<C: ModelClient + 'static> SynthesisStep<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Build the composite prompt and call the model with the team-leader
    /// instruction. No image is forwarded at this stage.
    pub async fn synthesize(
        &self,
        outcomes: &AgentOutcomeSet,
        original_text: &str,
    ) -> Result<TeamSummary, SynthesisError> {
        if !outcomes.is_complete() {
            return Err(SynthesisError::IncompleteOutcomes(outcomes.missing()));
        }

        info!("Synthesis: asking {}", TeamLeader::DISPLAY_NAME);
        let prompt = PromptTemplate::synthesis_prompt(original_text, outcomes);
        debug!(prompt_len = prompt.len(), "Built synthesis prompt");

        let text = self
            .client
            .generate(TeamLeader::system_instruction(), &prompt, None)
            .await?;

        Ok(TeamSummary::new(text))
    }
}
