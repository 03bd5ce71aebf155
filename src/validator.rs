//! Skill directory validation.
//!
//! Validates that a skill directory contains a well-formed `SKILL.md` file
//! with correct frontmatter, sensible structure, and resolvable references.
//!
//! # Rules
//!
//! | ID | What it checks |
//! |----|----------------|
//! | `skill/missing-skill-md` | `SKILL.md` must exist |
//! | `skill/unreadable` | `SKILL.md` must be readable as text |
//! | `frontmatter/missing-open` | Document must start with `---` |
//! | `frontmatter/missing-close` | A second `---` must close the frontmatter |
//! | `frontmatter/name-missing` | `name` field must exist and be non-empty |
//! | `frontmatter/name-format` | Name must be lowercase letters, digits, hyphens |
//! | `frontmatter/name-dir-mismatch` | Name must equal the directory name |
//! | `frontmatter/description-missing` | `description` must exist and be non-empty |
//! | `frontmatter/description-too-short` | Description must reach the word minimum |
//! | `skill/too-long` | `SKILL.md` must stay within the line limit |
//! | `skill/forbidden-file` | No `README.md`-style companion files |
//! | `refs/outside-skill-dir` | References must not escape the directory |
//! | `refs/missing-file` | Referenced files must exist |
//!
//! The first four rules are structural: any of them short-circuits the run
//! with a single violation. Every later rule is additive — each failing
//! check appends one violation and checking continues, so a single run can
//! report several independent problems.

use crate::config::{self, Config};
use crate::frontmatter::{self, FrontmatterError};
use crate::references;
use crate::violation::{ValidationReport, Violation};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Files that must not accompany a `SKILL.md`. Skills carry documentation in
/// the description field, not in companion markdown files.
pub const FORBIDDEN_FILES: &[&str] = &[
    "README.md",
    "INSTALLATION_GUIDE.md",
    "QUICK_REFERENCE.md",
    "CHANGELOG.md",
    "CONTRIBUTING.md",
];

/// Valid skill names: lowercase letters, digits, and hyphens only.
static RE_SKILL_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Validates a skill directory and returns the accumulated violations.
///
/// The returned list is ordered: frontmatter checks first, then document
/// structure, then references in sorted path order. An empty list means
/// validation passed. This function is read-only and never panics on
/// malformed input — every failure mode degrades to a violation.
pub fn validate(skill_dir: &Path, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();
    let skill_md = skill_dir.join("SKILL.md");

    if !skill_md.exists() {
        violations.push(Violation::with_path(
            "skill/missing-skill-md",
            "SKILL.md not found",
            &skill_md,
        ));
        return violations;
    }

    let content = match std::fs::read_to_string(&skill_md) {
        Ok(c) => c,
        Err(e) => {
            violations.push(Violation::with_path(
                "skill/unreadable",
                format!("Failed to read SKILL.md: {e}"),
                &skill_md,
            ));
            return violations;
        }
    };

    let doc = match frontmatter::split_document(&content) {
        Ok(doc) => doc,
        Err(FrontmatterError::MissingOpeningMarker) => {
            violations.push(Violation::with_path(
                "frontmatter/missing-open",
                "SKILL.md missing YAML frontmatter (must start with '---')",
                &skill_md,
            ));
            return violations;
        }
        Err(FrontmatterError::MissingClosingMarker) => {
            violations.push(Violation::with_path(
                "frontmatter/missing-close",
                "SKILL.md has invalid frontmatter (missing closing '---')",
                &skill_md,
            ));
            return violations;
        }
    };

    if config.checks.frontmatter {
        check_name(&mut violations, doc.frontmatter, skill_dir, &skill_md);
        check_description(&mut violations, doc.frontmatter, config, &skill_md);
    }

    if config.checks.structure {
        check_line_count(&mut violations, &content, config, &skill_md);
        check_forbidden_files(&mut violations, skill_dir);
    }

    if config.checks.references {
        references::check_references(&mut violations, skill_dir, doc.body);
    }

    violations
}

/// Validates a skill directory and assembles a full [`ValidationReport`],
/// applying any suppressions found in the directory's `.skillcheck-ignore`.
pub fn run_validation(skill_dir: &Path, config: &Config) -> ValidationReport {
    let violations = validate(skill_dir, config);
    let suppressions = config::load_suppressions(skill_dir);
    let skill = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    ValidationReport::from_violations(&skill, violations, &suppressions)
}

/// Name checks: presence, character class, and directory agreement.
///
/// The format and directory-mismatch checks run independently — an invalid
/// name that also differs from the directory produces two violations.
fn check_name(
    violations: &mut Vec<Violation>,
    frontmatter: &str,
    skill_dir: &Path,
    skill_md: &Path,
) {
    let name = frontmatter::extract_field(frontmatter, "name").filter(|v| !v.is_empty());
    let Some(name) = name else {
        violations.push(Violation::with_path(
            "frontmatter/name-missing",
            "YAML frontmatter missing required field: name",
            skill_md,
        ));
        return;
    };
    let name = name.trim();

    if !RE_SKILL_NAME.is_match(name) {
        violations.push(Violation::with_path(
            "frontmatter/name-format",
            format!("Skill name '{name}' invalid (use lowercase, hyphens only)"),
            skill_md,
        ));
    }

    let dir_name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if dir_name != name {
        violations.push(Violation::with_path(
            "frontmatter/name-dir-mismatch",
            format!("Directory name '{dir_name}' doesn't match skill name '{name}' in frontmatter"),
            skill_md,
        ));
    }
}

/// Description checks: presence and whitespace-normalized word count.
fn check_description(
    violations: &mut Vec<Violation>,
    frontmatter: &str,
    config: &Config,
    skill_md: &Path,
) {
    let description =
        frontmatter::extract_field(frontmatter, "description").filter(|v| !v.is_empty());
    let Some(description) = description else {
        violations.push(Violation::with_path(
            "frontmatter/description-missing",
            "YAML frontmatter missing required field: description",
            skill_md,
        ));
        return;
    };

    let word_count = description.split_whitespace().count();
    if word_count < config.limits.min_description_words {
        violations.push(Violation::with_path(
            "frontmatter/description-too-short",
            format!(
                "Description too short ({word_count} words). Should be comprehensive \
                 (>50 words recommended) and include trigger conditions."
            ),
            skill_md,
        ));
    }
}

/// Line-count check over the entire file, header included.
fn check_line_count(
    violations: &mut Vec<Violation>,
    content: &str,
    config: &Config,
    skill_md: &Path,
) {
    // split('\n') rather than lines(): a trailing newline counts as an extra
    // (empty) line, matching how editors display the file.
    let line_count = content.split('\n').count();
    if line_count > config.limits.max_skill_lines {
        violations.push(Violation::with_path(
            "skill/too-long",
            format!(
                "SKILL.md too long ({line_count} lines). Should be under {} lines. \
                 Move details to references/.",
                config.limits.max_skill_lines
            ),
            skill_md,
        ));
    }
}

/// One violation per forbidden companion file present in the directory.
fn check_forbidden_files(violations: &mut Vec<Violation>, skill_dir: &Path) {
    for forbidden in FORBIDDEN_FILES {
        let path = skill_dir.join(forbidden);
        if path.exists() {
            violations.push(Violation::with_path(
                "skill/forbidden-file",
                format!(
                    "Forbidden file found: {forbidden}. Skills should contain only essential files."
                ),
                path,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Rule catalogue
// ---------------------------------------------------------------------------

/// Metadata for a single validation rule.
///
/// Returned by [`rules`] and used by the `list-rules` and `explain` CLI
/// commands, and for SARIF rule descriptors.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"frontmatter/name-format"`).
    pub id: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns the [`RuleInfo`] catalogue for every validation rule.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "skill/missing-skill-md",
            message: "SKILL.md not found in skill root",
            remediation: "Create a SKILL.md file in the skill root with required frontmatter fields",
        },
        RuleInfo {
            id: "skill/unreadable",
            message: "SKILL.md could not be read as text",
            remediation: "Ensure SKILL.md is a readable UTF-8 text file",
        },
        RuleInfo {
            id: "frontmatter/missing-open",
            message: "SKILL.md does not start with a '---' frontmatter marker",
            remediation: "Begin SKILL.md with a '---' line followed by frontmatter fields",
        },
        RuleInfo {
            id: "frontmatter/missing-close",
            message: "SKILL.md frontmatter is never closed by a second '---'",
            remediation: "Add a closing '---' line after the frontmatter fields",
        },
        RuleInfo {
            id: "frontmatter/name-missing",
            message: "Required frontmatter field 'name' is missing or empty",
            remediation: "Add a non-empty 'name' field to the frontmatter",
        },
        RuleInfo {
            id: "frontmatter/name-format",
            message: "Skill name must use lowercase letters, digits, and hyphens only",
            remediation: "Rename to lowercase-kebab-case (e.g. 'my-skill' not 'My_Skill')",
        },
        RuleInfo {
            id: "frontmatter/name-dir-mismatch",
            message: "Skill name does not match the directory name",
            remediation: "Rename the directory or the frontmatter name so they agree",
        },
        RuleInfo {
            id: "frontmatter/description-missing",
            message: "Required frontmatter field 'description' is missing or empty",
            remediation: "Add a non-empty 'description' field to the frontmatter",
        },
        RuleInfo {
            id: "frontmatter/description-too-short",
            message: "Description is below the minimum word count",
            remediation: "Expand the description to 50+ words and include trigger conditions",
        },
        RuleInfo {
            id: "skill/too-long",
            message: "SKILL.md exceeds the maximum line count",
            remediation: "Trim SKILL.md and move details into reference/ files",
        },
        RuleInfo {
            id: "skill/forbidden-file",
            message: "A forbidden companion file is present in the skill directory",
            remediation: "Remove the file; skills should contain only essential files",
        },
        RuleInfo {
            id: "refs/outside-skill-dir",
            message: "A referenced file points outside the skill directory",
            remediation: "Move the referenced file into the skill directory and update the path",
        },
        RuleInfo {
            id: "refs/missing-file",
            message: "A referenced file does not exist",
            remediation: "Create the referenced file or fix the path in the SKILL.md body",
        },
    ]
}
