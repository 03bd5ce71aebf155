//! Frontmatter region splitting and field extraction.
//!
//! `SKILL.md` opens with a metadata block delimited by `---` marker lines.
//! This module splits the document into its frontmatter and body regions and
//! extracts individual field values from the frontmatter.
//!
//! # Field extraction
//!
//! A lightweight line-oriented scanner is used instead of a full YAML crate.
//! A field's raw value runs from the text after `field:` up to the next line
//! that starts a new top-level key (`identifier:` at column zero), and is
//! then interpreted as one of:
//!
//! - a literal block (`|` or `|-`) — remaining lines dedented, line breaks
//!   preserved;
//! - a folded block (`>` or `>-`) — remaining lines dedented and joined with
//!   single spaces;
//! - an inline flow sequence (`[a, b]`) — surrounding brackets stripped, the
//!   inner text used verbatim;
//! - a single-line scalar — the line, trimmed;
//! - a plain multi-line scalar — first line plus the dedented remainder,
//!   joined with spaces.
//!
//! Extraction never fails on malformed input: an absent field is `None`, an
//! empty one is `Some("")`, and everything else degrades to a best-effort
//! scalar.

use regex::Regex;
use std::sync::LazyLock;

/// Frontmatter delimiter line.
const MARKER: &str = "---";

/// A line starting a new top-level `key:` entry ends the previous field's
/// value. Keys may contain letters, digits, hyphens, and underscores, with
/// optional whitespace before the colon.
static RE_TOP_LEVEL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+\s*:").unwrap());

/// The two regions of a `SKILL.md` document.
#[derive(Debug)]
pub struct Document<'a> {
    /// Text between the first and second `---` markers, trimmed.
    pub frontmatter: &'a str,
    /// Everything after the second marker.
    pub body: &'a str,
}

/// Structural failures that make field extraction impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// The document does not start with the `---` marker.
    MissingOpeningMarker,
    /// No second `---` marker closes the frontmatter block.
    MissingClosingMarker,
}

/// Splits a document into its frontmatter and body regions.
///
/// The content must start with `---` and contain a second `---`; the text
/// between the first two markers becomes the frontmatter and everything
/// after the second becomes the body.
///
/// # Errors
///
/// Returns a [`FrontmatterError`] when either marker is absent.
pub fn split_document(content: &str) -> Result<Document<'_>, FrontmatterError> {
    if !content.starts_with(MARKER) {
        return Err(FrontmatterError::MissingOpeningMarker);
    }

    let mut parts = content.splitn(3, MARKER);
    parts.next(); // pre-marker segment, always empty here
    match (parts.next(), parts.next()) {
        (Some(frontmatter), Some(body)) => Ok(Document {
            frontmatter: frontmatter.trim(),
            body,
        }),
        _ => Err(FrontmatterError::MissingClosingMarker),
    }
}

/// Extracts the value of a top-level `field:` entry from the frontmatter.
///
/// Returns `None` when no line starts with `field:`. An empty value yields
/// `Some(String::new())` — present but empty, which still fails required-field
/// checks downstream.
///
/// # Examples
///
/// ```
/// use skillcheck::frontmatter::extract_field;
///
/// let fm = "name: my-skill\ndescription: |\n  line one\n  line two";
/// assert_eq!(extract_field(fm, "name").as_deref(), Some("my-skill"));
/// assert_eq!(
///     extract_field(fm, "description").as_deref(),
///     Some("line one\nline two")
/// );
/// ```
pub fn extract_field(frontmatter: &str, field: &str) -> Option<String> {
    let prefix = format!("{field}:");
    let mut lines = frontmatter.lines();

    let mut raw = loop {
        let line = lines.next()?;
        if let Some(rest) = line.strip_prefix(&prefix) {
            break rest.to_string();
        }
    };

    // Continuation lines belong to this field until the next top-level key.
    for line in lines {
        if RE_TOP_LEVEL_KEY.is_match(line) {
            break;
        }
        raw.push('\n');
        raw.push_str(line);
    }

    Some(normalize_value(&raw))
}

/// Interprets a raw multi-line field value according to its first line.
fn normalize_value(raw: &str) -> String {
    let raw = raw.trim_end();
    if raw.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let first = lines[0].trim();

    if matches!(first, "|" | "|-" | ">" | ">-") {
        let dedented = dedent(&lines[1..]);
        let block = dedented.trim_matches('\n');
        if first.starts_with('>') {
            // Folded block: every line collapses into one, space-separated.
            let folded: Vec<&str> = block.split('\n').map(str::trim).collect();
            return folded.join(" ").trim().to_string();
        }
        return block.trim().to_string();
    }

    let value = raw.trim();
    if value.starts_with('[') && value.ends_with(']') {
        // Inline flow sequence, flattened: the inner text becomes the value.
        return value[1..value.len() - 1].trim().to_string();
    }

    if lines.len() == 1 {
        return value.to_string();
    }

    // Plain multi-line scalar: first line plus the dedented remainder.
    let first_line = lines[0].trim();
    let remainder = dedent(&lines[1..]).trim().replace('\n', " ");
    let combined: Vec<&str> = [first_line, remainder.as_str()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect();
    combined.join(" ").trim().to_string()
}

/// Strips the minimum leading whitespace shared by all non-blank lines.
///
/// Whitespace-only lines are ignored when computing the common indent and
/// are normalized to empty strings in the result.
fn dedent(lines: &[&str]) -> String {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.get(indent..).unwrap_or("")
            }
        })
        .collect();
    stripped.join("\n")
}
