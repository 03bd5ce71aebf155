//! Referenced-file extraction and resolution.
//!
//! Skill bodies mention auxiliary files in two textual forms:
//!
//! - inline code spans: `` `scripts/run.py` ``
//! - Markdown link targets: `[setup guide](reference/setup.md)`
//!
//! Only paths rooted at one of the conventional skill subdirectories
//! (`steps/`, `reference/`, `templates/`, `scripts/`, `assets/`), optionally
//! prefixed with `../`, are treated as references. Each collected path is
//! resolved against the skill directory; a `../` prefix is a violation on its
//! own and skips the existence check.

use crate::violation::Violation;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

static RE_CODE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`(?P<path>(?:\.\./)?(?:steps|reference|templates|scripts|assets)/[^`]+)`")
        .unwrap()
});

static RE_LINK_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[[^\]]+\]\((?P<path>(?:\.\./)?(?:steps|reference|templates|scripts|assets)/[^)]+)\)",
    )
    .unwrap()
});

/// Collects every referenced path in the body, deduplicated and sorted.
///
/// # Examples
///
/// ```
/// use skillcheck::references::referenced_paths;
///
/// let body = "Run `scripts/run.py`, then see [docs](reference/api.md).";
/// let paths = referenced_paths(body);
/// assert!(paths.contains("reference/api.md"));
/// assert!(paths.contains("scripts/run.py"));
/// ```
pub fn referenced_paths(body: &str) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    for caps in RE_CODE_PATH.captures_iter(body) {
        paths.insert(caps["path"].trim().to_string());
    }
    for caps in RE_LINK_PATH.captures_iter(body) {
        paths.insert(caps["path"].trim().to_string());
    }
    paths
}

/// Checks that every referenced path resolves inside the skill directory.
///
/// Appends one violation per escaping (`../`) reference and one per
/// reference with no filesystem entry, in sorted path order.
pub fn check_references(violations: &mut Vec<Violation>, skill_dir: &Path, body: &str) {
    for reference in referenced_paths(body) {
        if reference.starts_with("../") {
            violations.push(Violation::with_path(
                "refs/outside-skill-dir",
                format!("Referenced file points outside skill directory: {reference}"),
                &reference,
            ));
            continue;
        }
        if !skill_dir.join(&reference).exists() {
            violations.push(Violation::with_path(
                "refs/missing-file",
                format!("Referenced file not found: {reference}"),
                &reference,
            ));
        }
    }
}
