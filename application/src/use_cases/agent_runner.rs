//! Agent Runner
//!
//! Runs one specialist against the model client and contains its failure.

use crate::ports::model_client::ModelClient;
use heartmend_domain::{AgentIdentity, AgentOutcome, UserInput};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs a single specialist
///
/// `run` never fails: a model client error becomes an [`AgentOutcome`]
/// carrying the error description, so one specialist cannot take down the
/// others or the synthesis step.
pub struct AgentRunner<C: ModelClient + 'static> {
    client: Arc<C>,
}

impl<C: ModelClient + 'static> AgentRunner<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn run(&self, identity: AgentIdentity, input: &UserInput) -> AgentOutcome {
        let name = identity.display_name();
        debug!(
            agent = identity.as_str(),
            has_image = input.has_image(),
            "Dispatching specialist"
        );

        match self
            .client
            .generate(
                identity.system_instruction(),
                input.feelings(),
                input.image(),
            )
            .await
        {
            Ok(output) => {
                info!("{} responded successfully", name);
                AgentOutcome::success(name, output)
            }
            Err(e) => {
                warn!("{} failed: {}", name, e);
                AgentOutcome::failure(name, e.to_string())
            }
        }
    }
}

impl<C: ModelClient + 'static> Clone for AgentRunner<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
