//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing skill metadata, a
//! count summary, active violations, and suppressed violations.

use crate::violation::{ValidationReport, Violation};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    skill: &'a str,
    validated_at: &'a str,
    passed: bool,
    summary: Summary,
    violations: &'a [Violation],
    suppressed: &'a [Violation],
}

#[derive(serde::Serialize)]
struct Summary {
    violations: usize,
    suppressed: usize,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let output = JsonOutput {
        skill: &report.skill,
        validated_at: &report.validated_at,
        passed: report.passed,
        summary: Summary {
            violations: report.violations.len(),
            suppressed: report.suppressed.len(),
        },
        violations: &report.violations,
        suppressed: &report.suppressed,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
