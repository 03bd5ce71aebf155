//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report: a numbered violation list on failure,
//! or a fixed checklist of everything that was verified on success.

use crate::violation::ValidationReport;
use colored::Colorize;

/// Checks confirmed by a passing run, shown as a checklist.
const PASSED_CHECKS: &[&str] = &[
    "SKILL.md exists",
    "Valid YAML frontmatter",
    "Required fields present (name, description)",
    "Description comprehensive",
    "SKILL.md within line limit",
    "Directory name matches skill name",
    "Referenced files exist",
    "No forbidden files",
];

/// Formats a [`ValidationReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — skill name and timestamp.
/// 2. **Violations** — numbered list, or the passed-checks checklist.
/// 3. **Suppressed** — suppressed violations with reasons.
/// 4. **Summary** — overall result and counts.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Skill Validation: {}  ", report.skill)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.validated_at));

    if report.violations.is_empty() {
        out.push_str(&format!("{}\n\n", "Skill validation passed".green().bold()));
        out.push_str("All checks passed:\n");
        for check in PASSED_CHECKS {
            out.push_str(&format!("  {} {check}\n", "✓".green()));
        }
    } else {
        out.push_str(&format!("{}\n\n", "Validation failed:".red().bold()));
        for (i, violation) in report.violations.iter().enumerate() {
            out.push_str(&format!(
                "{n}. {message}\n",
                n = i + 1,
                message = violation.message,
            ));
            out.push_str(&format!("   {}\n", violation.rule_id.dimmed()));
        }
    }
    out.push('\n');

    // Suppressed violations
    if !report.suppressed.is_empty() {
        out.push_str(&format!(
            "{} ({} suppressed)\n",
            "Suppressed".bold().underline(),
            report.suppressed.len()
        ));
        for violation in &report.suppressed {
            let reason = violation
                .suppression_reason
                .as_deref()
                .unwrap_or("no reason given");
            out.push_str(&format!(
                "  [SKIP] {:<28} {}\n",
                violation.rule_id.dimmed(),
                reason.dimmed(),
            ));
        }
        out.push('\n');
    }

    // Summary
    let status_str = if report.passed {
        "PASSED".green().bold().to_string()
    } else {
        "FAILED".red().bold().to_string()
    };
    out.push_str(&format!(
        "Result: {status_str}  |  {} violations, {} suppressed\n",
        report.violations.len(),
        report.suppressed.len(),
    ));

    out
}
