//! Progress notification port
//!
//! Defines the interface for reporting progress during a team run.

use heartmend_domain::Phase;

/// Callback for progress updates during a team run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when one agent within a phase reaches a terminal state
    fn on_agent_complete(&self, phase: &Phase, agent_name: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_agent_complete(&self, _phase: &Phase, _agent_name: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
