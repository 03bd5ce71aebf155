//! Core data types: [`Violation`] and [`ValidationReport`].

use crate::config::Suppression;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single failed validation check.
///
/// The [`Display`](fmt::Display) impl yields the human-readable message, so a
/// `Vec<Violation>` doubles as the plain list of violation strings produced by
/// [`validator::validate`](crate::validator::validate).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    /// Stable rule identifier (e.g., `"frontmatter/name-format"`).
    pub rule_id: String,
    /// Human-readable description of what failed.
    pub message: String,
    /// The offending file, when one exists. Frontmatter rules point at
    /// `SKILL.md`; reference rules carry the referenced path as written.
    pub path: Option<PathBuf>,
    pub suppressed: bool,
    pub suppression_reason: Option<String>,
}

impl Violation {
    pub fn new(rule_id: &str, message: impl Into<String>) -> Self {
        Violation {
            rule_id: rule_id.to_string(),
            message: message.into(),
            path: None,
            suppressed: false,
            suppression_reason: None,
        }
    }

    pub fn with_path(rule_id: &str, message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Violation {
            path: Some(path.into()),
            ..Violation::new(rule_id, message)
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The outcome of validating one skill directory.
#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    /// Skill name (the directory's last path segment).
    pub skill: String,
    /// RFC 3339 timestamp of the validation run.
    pub validated_at: String,
    /// Active violations, in check order.
    pub violations: Vec<Violation>,
    /// Violations silenced by `.skillcheck-ignore` entries.
    pub suppressed: Vec<Violation>,
    /// `true` when no active violation remains.
    pub passed: bool,
}

impl ValidationReport {
    /// Assembles a report from raw violations, applying suppression rules.
    ///
    /// Each violation matching a [`Suppression`] is moved to the
    /// [`suppressed`](ValidationReport::suppressed) list with its reason
    /// attached; `passed` reflects only the remaining active violations.
    pub fn from_violations(
        skill: &str,
        violations: Vec<Violation>,
        suppressions: &[Suppression],
    ) -> Self {
        let mut active = Vec::new();
        let mut suppressed = Vec::new();

        for mut violation in violations {
            if let Some(s) = find_suppression(&violation, suppressions) {
                violation.suppressed = true;
                violation.suppression_reason = Some(s.reason.clone());
                suppressed.push(violation);
            } else {
                active.push(violation);
            }
        }

        let passed = active.is_empty();

        ValidationReport {
            skill: skill.to_string(),
            validated_at: chrono::Utc::now().to_rfc3339(),
            violations: active,
            suppressed,
            passed,
        }
    }
}

fn find_suppression<'a>(
    violation: &Violation,
    suppressions: &'a [Suppression],
) -> Option<&'a Suppression> {
    suppressions.iter().find(|s| {
        if s.rule != violation.rule_id {
            return false;
        }
        // Use Path::ends_with so that a suppression for "run.py" matches
        // "scripts/run.py" but NOT "scripts/dry-run.py". An empty path field
        // acts as a wildcard; a path-less violation can only be matched by a
        // wildcard entry.
        match &violation.path {
            Some(path) => s.path.is_empty() || path.ends_with(Path::new(&s.path)),
            None => s.path.is_empty(),
        }
    })
}
