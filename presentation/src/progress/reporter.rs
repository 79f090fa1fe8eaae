//! Progress reporting for team runs

use colored::Colorize;
use heartmend_application::ProgressNotifier;
use heartmend_domain::Phase;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a team run with progress bars on stderr
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Draw the bars somewhere other than stderr.
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn status(agent_name: &str, success: bool) -> String {
        if success {
            format!("{} {}", "v".green(), agent_name)
        } else {
            format!("{} {}", "x".red(), agent_name)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name().to_string());
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_agent_complete(&self, _phase: &Phase, agent_name: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::status(agent_name, success));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_agent_complete(&self, _phase: &Phase, agent_name: &str, success: bool) {
        if success {
            eprintln!("  {}", ProgressReporter::status(agent_name, true));
        } else {
            eprintln!("  {} (failed)", ProgressReporter::status(agent_name, false));
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_reporter() -> ProgressReporter {
        ProgressReporter::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn test_status_marks_success_and_failure() {
        colored::control::set_override(false);
        let name = "Closure Agent";
        assert_eq!(ProgressReporter::status(name, true), "v Closure Agent");
        assert_eq!(ProgressReporter::status(name, false), "x Closure Agent");
    }

    #[test]
    fn test_phase_bar_lifecycle() {
        let reporter = hidden_reporter();

        reporter.on_phase_start(&Phase::FanOut, 4);
        let bar = reporter.phase_bar.lock().unwrap().clone().unwrap();
        assert_eq!(bar.length(), Some(4));
        assert_eq!(bar.prefix(), "Specialists");

        reporter.on_agent_complete(&Phase::FanOut, "Therapist Agent", true);
        reporter.on_agent_complete(&Phase::FanOut, "Closure Agent", false);
        assert_eq!(bar.position(), 2);

        reporter.on_phase_complete(&Phase::FanOut);
        assert!(bar.is_finished());
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_events_without_a_started_phase_are_ignored() {
        let reporter = hidden_reporter();
        reporter.on_agent_complete(&Phase::Synthesis, "Team Leader", true);
        reporter.on_phase_complete(&Phase::Synthesis);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_simple_progress_reports_both_phases() {
        colored::control::set_override(false);
        let progress = SimpleProgress;
        for phase in [Phase::FanOut, Phase::Synthesis] {
            progress.on_phase_start(&phase, 4);
            progress.on_agent_complete(&phase, "Therapist Agent", true);
            progress.on_agent_complete(&phase, "Closure Agent", false);
            progress.on_phase_complete(&phase);
        }
    }
}
