//! Parallel Fan-Out Orchestrator
//!
//! Dispatches every specialist concurrently and waits for all of them.

use crate::ports::model_client::ModelClient;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::agent_runner::AgentRunner;
use heartmend_domain::{AgentIdentity, AgentOutcome, AgentOutcomeSet, Phase, UserInput};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Runs the four specialists concurrently
///
/// This is an all-settle join: every task is drained to a terminal state and
/// no failure short-circuits the others. The returned set always holds an
/// outcome for every [`AgentIdentity`].
pub struct FanOutOrchestrator<C: ModelClient + 'static> {
    runner: AgentRunner<C>,
}

impl<C: ModelClient + 'static> FanOutOrchestrator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            runner: AgentRunner::new(client),
        }
    }

    /// Run all specialists with default (no-op) progress
    pub async fn run_all(&self, input: &UserInput) -> AgentOutcomeSet {
        self.run_all_with_progress(input, &NoProgress).await
    }

    /// Run all specialists with progress callbacks
    pub async fn run_all_with_progress(
        &self,
        input: &UserInput,
        progress: &dyn ProgressNotifier,
    ) -> AgentOutcomeSet {
        info!(
            "Fan-out: dispatching {} specialists",
            AgentIdentity::ALL.len()
        );
        progress.on_phase_start(&Phase::FanOut, AgentIdentity::ALL.len());

        let input = Arc::new(input.clone());
        let mut join_set = JoinSet::new();
        let mut task_owners = HashMap::new();

        for identity in AgentIdentity::ALL {
            let runner = self.runner.clone();
            let input = Arc::clone(&input);

            let handle = join_set.spawn(async move {
                let outcome = runner.run(identity, &input).await;
                (identity, outcome)
            });
            task_owners.insert(handle.id(), identity);
        }

        let mut outcomes = AgentOutcomeSet::new();

        while let Some(result) = join_set.join_next_with_id().await {
            let (identity, outcome) = match result {
                Ok((_, (identity, outcome))) => (identity, outcome),
                Err(e) => {
                    // A panicked task still owns its slot.
                    let Some(identity) = task_owners.get(&e.id()).copied() else {
                        warn!("Join error from unknown task: {}", e);
                        continue;
                    };
                    warn!("{} task did not finish: {}", identity.display_name(), e);
                    (
                        identity,
                        AgentOutcome::failure(
                            identity.display_name(),
                            format!("Agent task failed: {}", e),
                        ),
                    )
                }
            };

            progress.on_agent_complete(&Phase::FanOut, &outcome.name, outcome.is_success());
            if let Err(e) = outcomes.record(identity, outcome) {
                warn!("Discarding duplicate outcome: {}", e);
            }
        }

        info!(
            succeeded = outcomes.successful().count(),
            failed = outcomes.failed().count(),
            "Fan-out complete"
        );
        progress.on_phase_complete(&Phase::FanOut);
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_client::{ModelClient, ModelClientError};
    use crate::use_cases::test_support::ScriptedClient;
    use async_trait::async_trait;
    use heartmend_domain::ImageAttachment;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn input() -> UserInput {
        UserInput::new("We broke up last week").unwrap()
    }

    #[tokio::test]
    async fn test_all_four_identities_present_on_success() {
        let client = Arc::new(ScriptedClient::always_ok());
        let outcomes = FanOutOrchestrator::new(client.clone())
            .run_all(&input())
            .await;

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.is_complete());
        for identity in AgentIdentity::ALL {
            let outcome = outcomes.get(identity).unwrap();
            assert_eq!(outcome.name, identity.display_name());
            let expected = format!("advice from {}", identity.as_str());
            assert_eq!(outcome.output, expected);
        }
        assert_eq!(client.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_all_four_identities_present_on_total_failure() {
        let outcomes = FanOutOrchestrator::new(Arc::new(ScriptedClient::always_failing()))
            .run_all(&input())
            .await;

        assert_eq!(outcomes.len(), 4);
        for identity in AgentIdentity::ALL {
            let outcome = outcomes.get(identity).unwrap();
            assert!(outcome.output.is_empty());
            assert!(!outcome.error.as_deref().unwrap_or_default().is_empty());
        }
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_others() {
        let client = Arc::new(ScriptedClient::failing_for(AgentIdentity::Closure));
        let outcomes = FanOutOrchestrator::new(client).run_all(&input()).await;

        let closure = outcomes.get(AgentIdentity::Closure).unwrap();
        assert!(closure.output.is_empty());
        assert!(closure.error.is_some());

        for identity in [
            AgentIdentity::Therapist,
            AgentIdentity::Routine,
            AgentIdentity::Honesty,
        ] {
            let outcome = outcomes.get(identity).unwrap();
            assert!(outcome.is_success());
            let expected = format!("advice from {}", identity.as_str());
            assert_eq!(outcome.output, expected);
        }
    }

    /// Blocks every call on a four-party barrier, so the test only finishes
    /// if all specialists are in flight at the same time.
    struct BarrierClient {
        barrier: Barrier,
    }

    #[async_trait]
    impl ModelClient for BarrierClient {
        async fn generate(
            &self,
            _system_instruction: &str,
            _user_text: &str,
            _image: Option<&ImageAttachment>,
        ) -> Result<String, ModelClientError> {
            self.barrier.wait().await;
            Ok("together".to_string())
        }
    }

    #[tokio::test]
    async fn test_specialists_run_concurrently() {
        let client = Arc::new(BarrierClient {
            barrier: Barrier::new(4),
        });
        let outcomes = tokio::time::timeout(
            Duration::from_secs(5),
            FanOutOrchestrator::new(client).run_all(&input()),
        )
        .await
        .expect("fan-out should not serialize specialist calls");

        assert_eq!(outcomes.successful().count(), 4);
    }

    /// Panics for one specialist to exercise join-error containment.
    struct PanickingClient;

    #[async_trait]
    impl ModelClient for PanickingClient {
        async fn generate(
            &self,
            system_instruction: &str,
            _user_text: &str,
            _image: Option<&ImageAttachment>,
        ) -> Result<String, ModelClientError> {
            if system_instruction == AgentIdentity::Routine.system_instruction() {
                panic!("routine planner exploded");
            }
            Ok("fine".to_string())
        }
    }

    #[tokio::test]
    async fn test_panicked_task_still_fills_its_slot() {
        let outcomes = FanOutOrchestrator::new(Arc::new(PanickingClient))
            .run_all(&input())
            .await;

        assert!(outcomes.is_complete());
        let routine = outcomes.get(AgentIdentity::Routine).unwrap();
        assert!(!routine.is_success());
        assert_eq!(routine.name, "Routine Planner Agent");
        let error = routine.error.as_deref().unwrap_or_default();
        assert!(error.starts_with("Agent task failed"));
        assert_eq!(outcomes.successful().count(), 3);
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {} {}", phase.as_str(), total_tasks));
        }

        fn on_agent_complete(&self, _phase: &Phase, agent_name: &str, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {}", agent_name, success));
        }

        fn on_phase_complete(&self, phase: &Phase) {
            self.events
                .lock()
                .unwrap()
                .push(format!("end {}", phase.as_str()));
        }
    }

    #[tokio::test]
    async fn test_progress_reports_every_agent() {
        let progress = RecordingProgress::default();
        let client = Arc::new(ScriptedClient::failing_for(AgentIdentity::Honesty));
        FanOutOrchestrator::new(client)
            .run_all_with_progress(&input(), &progress)
            .await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0], "start fan_out 4");
        assert_eq!(events[5], "end fan_out");
        let honesty = "done Brutal Honesty Agent false".to_string();
        let therapist = "done Therapist Agent true".to_string();
        assert!(events.contains(&honesty));
        assert!(events.contains(&therapist));
    }
}
