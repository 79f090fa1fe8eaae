//! Run Team use case
//!
//! Orchestrates one full submission: fan-out, barrier, synthesis.

use crate::ports::model_client::ModelClient;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::fan_out::FanOutOrchestrator;
use crate::use_cases::synthesis::{SynthesisError, SynthesisStep};
use heartmend_domain::{Phase, TeamLeader, TeamRun, UserInput};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can end a team run
///
/// Specialist failures never show up here; they are recorded inside the
/// run's outcome set.
#[derive(Error, Debug)]
pub enum RunTeamError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Use case for running the specialist team on one submission
pub struct RunTeamUseCase<C: ModelClient + 'static> {
    fan_out: FanOutOrchestrator<C>,
    synthesis: SynthesisStep<C>,
}

impl<C: ModelClient + 'static> RunTeamUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            fan_out: FanOutOrchestrator::new(Arc::clone(&client)),
            synthesis: SynthesisStep::new(client),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: UserInput) -> Result<TeamRun, RunTeamError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: UserInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<TeamRun, RunTeamError> {
        info!(has_image = input.has_image(), "Starting team run");

        let outcomes = self.fan_out.run_all_with_progress(&input, progress).await;

        progress.on_phase_start(&Phase::Synthesis, 1);
        let feelings = input.feelings();
        let summary = match self.synthesis.synthesize(&outcomes, feelings).await {
            Ok(summary) => {
                progress.on_agent_complete(&Phase::Synthesis, TeamLeader::DISPLAY_NAME, true);
                progress.on_phase_complete(&Phase::Synthesis);
                summary
            }
            Err(e) => {
                warn!("Synthesis failed: {}", e);
                progress.on_agent_complete(&Phase::Synthesis, TeamLeader::DISPLAY_NAME, false);
                progress.on_phase_complete(&Phase::Synthesis);
                return Err(e.into());
            }
        };

        let run = TeamRun::new(feelings, input.has_image(), outcomes, summary);
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ScriptedClient, transport};
    use heartmend_domain::{AgentIdentity, ImageAttachment, NO_RESPONSE_PLACEHOLDER};

    #[tokio::test]
    async fn test_end_to_end_success() {
        let client = Arc::new(ScriptedClient::always_ok());
        let use_case = RunTeamUseCase::new(client.clone());

        let run = use_case
            .execute(UserInput::new("We broke up last week").unwrap())
            .await
            .unwrap();

        assert_eq!(run.outcomes.len(), 4);
        for identity in AgentIdentity::ALL {
            let outcome = run.outcomes.get(identity).unwrap();
            assert!(!outcome.name.is_empty());
            assert_eq!(outcome.name, identity.display_name());
        }
        assert_eq!(run.summary.as_str(), "team summary");
        assert_eq!(run.feelings, "We broke up last week");
        assert!(!run.had_image);

        let calls = client.calls();
        assert_eq!(calls.len(), 5);
        let leader = client.leader_calls();
        assert_eq!(leader.len(), 1);
        assert_eq!(leader[0].finished_before, 4);
        assert!(calls.last().unwrap().is_leader());
        assert!(leader[0].user_text.contains("We broke up last week"));
    }

    #[tokio::test]
    async fn test_image_reaches_specialists_only() {
        let client = Arc::new(ScriptedClient::always_ok());
        let image = ImageAttachment::new(vec![0xff, 0xd8], "image/jpeg").unwrap();
        let input = UserInput::new("see the screenshot")
            .unwrap()
            .with_image(image);

        let run = RunTeamUseCase::new(client.clone())
            .execute(input)
            .await
            .unwrap();
        assert!(run.had_image);

        for call in client.calls() {
            if call.is_leader() {
                assert_eq!(call.image_mime, None);
            } else {
                assert_eq!(call.image_mime.as_deref(), Some("image/jpeg"));
            }
        }
    }

    #[tokio::test]
    async fn test_synthesis_runs_even_when_every_specialist_fails() {
        let client = ScriptedClient::new(|identity, _| match identity {
            Some(_) => Err(transport("503 Service Unavailable")),
            None => Ok("hang in there".to_string()),
        });
        let client = Arc::new(client);

        let run = RunTeamUseCase::new(client.clone())
            .execute(UserInput::new("We broke up last week").unwrap())
            .await
            .unwrap();

        assert_eq!(run.failed_count(), 4);
        assert_eq!(run.summary.as_str(), "hang in there");
        let prompt = &client.leader_calls()[0].user_text;
        assert_eq!(prompt.matches(NO_RESPONSE_PLACEHOLDER).count(), 4);
    }

    #[tokio::test]
    async fn test_total_failure_is_fatal_and_distinguishable() {
        let client = Arc::new(ScriptedClient::always_failing());

        let err = RunTeamUseCase::new(client.clone())
            .execute(UserInput::new("We broke up last week").unwrap())
            .await
            .unwrap_err();

        let RunTeamError::Synthesis(SynthesisError::ModelCall(inner)) = &err else {
            panic!("expected a team leader model failure, got {err:?}");
        };
        assert!(inner.is_transport());
        assert!(err.to_string().starts_with("Team Leader failed"));

        let leader = client.leader_calls();
        assert_eq!(leader.len(), 1);
        let placeholders = leader[0].user_text.matches(NO_RESPONSE_PLACEHOLDER);
        assert_eq!(placeholders.count(), 4);
    }
}
