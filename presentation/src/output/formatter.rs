//! Output formatter trait

use heartmend_domain::TeamRun;

/// Trait for formatting team runs
pub trait OutputFormatter {
    /// Format every specialist section followed by the summary
    fn format(&self, run: &TeamRun) -> String;

    /// Format as JSON
    fn format_json(&self, run: &TeamRun) -> String;

    /// Format the team leader's summary only (concise output)
    fn format_summary_only(&self, run: &TeamRun) -> String;
}
