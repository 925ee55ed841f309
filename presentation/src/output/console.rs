//! Console output formatter for panel results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use panel_domain::{PanelReport, PanelResult, RefineReport};

/// Formats panel reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete panel report
    pub fn format(report: &PanelReport) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("LLM Panel Results"));
        output.push('\n');

        // Question
        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            report.question
        ));

        // Seats
        output.push_str(&format!(
            "{} {}\n\n",
            "Seats:".cyan().bold(),
            report
                .seats
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        // Phase 1: Panel Answers
        output.push_str(&Self::section_header("Phase 1: Panel Answers"));
        output.push_str(&Self::answer_blocks(&report.answers));

        // Phase 2: Cross-Critique (if any)
        if !report.critiques.is_empty() {
            output.push_str(&Self::section_header("Phase 2: Cross-Critique"));
            for critique in &report.critiques {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} asks ──", critique.critic).yellow().bold(),
                    critique.content
                ));
            }
        }

        // Phase 3: Synthesis
        output.push_str(&Self::section_header("Phase 3: Synthesis"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Adjudicator: {}", report.synthesis.adjudicator)
                .yellow()
                .bold(),
            report.synthesis.text
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &PanelReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(report: &PanelReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Panel Conclusion ===".cyan().bold()));

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), report.question));

        output.push_str(&format!(
            "{} {}\n\n",
            "Seats consulted:".dimmed(),
            report
                .seats
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        output.push_str(&report.synthesis.text);
        output.push('\n');

        output
    }

    /// Format the raw panel answers when synthesis could not run
    pub fn format_degraded(answers: &PanelResult, reason: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Synthesis unavailable".yellow().bold()));
        output.push_str(&format!("{} {}\n", "Reason:".yellow(), reason));

        output.push_str(&Self::section_header("Raw Panel Answers"));
        output.push_str(&Self::answer_blocks(answers));

        output.push_str(&Self::footer());

        output
    }

    /// Format a refinement chain
    pub fn format_refine(report: &RefineReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Refinement Chain"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            report.question
        ));

        for step in &report.steps {
            match &step.error {
                None => {
                    output.push_str(&format!(
                        "\n{}\n",
                        format!("── {} ──", step.provider).yellow().bold()
                    ));
                    if let Some(analysis) = &step.analysis {
                        output.push_str(&format!(
                            "{}\n{}\n\n",
                            "Analysis:".dimmed(),
                            Self::indent(analysis, "  ")
                        ));
                    }
                    output.push_str(&format!("{}\n", step.text));
                }
                Some(error) => {
                    output.push_str(&format!(
                        "\n{}\nError: {} (previous answer kept)\n",
                        format!("── {} ──", step.provider).red().bold(),
                        error
                    ));
                }
            }
        }

        output.push_str(&Self::section_header("Final Answer"));
        output.push_str(&format!("\n{}\n", report.final_text()));

        output.push_str(&Self::footer());

        output
    }

    /// Format a refinement chain as JSON
    pub fn format_refine_json(report: &RefineReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn answer_blocks(answers: &PanelResult) -> String {
        let mut output = String::new();
        for answer in answers {
            match &answer.text {
                Some(text) => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", answer.provider).yellow().bold(),
                        text
                    ));
                }
                None => {
                    output.push_str(&format!(
                        "\n{}\nError: {}\n",
                        format!("── {} ──", answer.provider).red().bold(),
                        answer.error.as_deref().unwrap_or("Unknown")
                    ));
                }
            }
        }
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

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &PanelReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &PanelReport) -> String {
        Self::format_json(report)
    }

    fn format_synthesis_only(&self, report: &PanelReport) -> String {
        Self::format_synthesis_only(report)
    }
}
