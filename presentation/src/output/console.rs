//! Console output formatter for team runs

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use heartmend_domain::{OutputFormat, TeamLeader, TeamRun};

/// Formats team runs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a run in the requested format.
    pub fn render(run: &TeamRun, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(run),
            OutputFormat::Summary => Self::format_summary_only(run),
            OutputFormat::Json => Self::format_json(run),
        }
    }

    /// Format the complete team run
    pub fn format(run: &TeamRun) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Breakup Recovery Squad"));
        output.push('\n');

        let said = "You said:".cyan().bold();
        output.push_str(&format!("{} {}\n", said, run.feelings.trim()));
        if run.had_image {
            output.push_str(&format!("{}\n", "(screenshot attached)".dimmed()));
        }
        output.push('\n');

        output.push_str(&Self::section_header("Specialists"));
        for (identity, outcome) in run.outcomes.iter() {
            let title = format!("── {} {} ──", identity.icon(), outcome.name);
            let section = match &outcome.error {
                None => format!("\n{}\n{}\n", title.yellow().bold(), outcome.output),
                Some(error) => {
                    let label = "Error:".red();
                    format!("\n{}\n{} {}\n", title.red().bold(), label, error)
                }
            };
            output.push_str(&section);
        }

        output.push_str(&Self::section_header("Team Leader"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("{} {}", TeamLeader::ICON, TeamLeader::DISPLAY_NAME)
                .yellow()
                .bold(),
            run.summary
        ));

        let failed = run.failed_count();
        if failed > 0 {
            let total = run.outcomes.len();
            let note = format!("{} of {} specialists could not respond.", failed, total);
            output.push_str(&format!("\n{}\n", note.dimmed()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(run: &TeamRun) -> String {
        serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format summary only (concise output)
    pub fn format_summary_only(run: &TeamRun) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} {} ===", TeamLeader::ICON, TeamLeader::DISPLAY_NAME)
                .cyan()
                .bold()
        ));

        output.push_str(run.summary.as_str());
        output.push('\n');

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, run: &TeamRun) -> String {
        Self::format(run)
    }

    fn format_json(&self, run: &TeamRun) -> String {
        Self::format_json(run)
    }

    fn format_summary_only(&self, run: &TeamRun) -> String {
        Self::format_summary_only(run)
    }
}
