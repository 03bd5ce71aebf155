//! Configuration loading and management.
//!
//! Provides types for the TOML-based configuration file and for
//! violation-suppression rules stored in `.skillcheck-ignore` files.
//!
//! # Configuration file
//!
//! The default configuration file is `skillcheck.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillcheck::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.limits.max_skill_lines, 500);
//! ```
//!
//! # Suppression files
//!
//! Place a `.skillcheck-ignore` file inside a skill directory to suppress
//! specific violations. See [`Suppression`] for the format and
//! [`load_suppressions`] for loading.

use std::path::Path;

/// Main configuration for the validator.
///
/// Loaded from a TOML file (typically `skillcheck.toml`). All fields carry
/// defaults matching the published skill guidelines, so the config file can
/// be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Numeric thresholds for length-style checks.
    pub limits: LimitsConfig,
    /// Per-check-group on/off toggles.
    pub checks: ChecksConfig,
}

/// Numeric thresholds for length-style checks.
///
/// The defaults match the skill guidelines: a `SKILL.md` of at most 500
/// lines and a description of at least 20 words.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of lines in `SKILL.md`.
    pub max_skill_lines: usize,
    /// Minimum whitespace-normalized word count for the description field.
    pub min_description_words: usize,
}

/// Per-check-group on/off toggles.
///
/// Every group defaults to **enabled**. The structural checks (missing file,
/// missing frontmatter markers) always run — a skill with no readable
/// `SKILL.md` cannot be validated at all.
///
/// # Examples
///
/// ```toml
/// [checks]
/// references = false   # skip referenced-file resolution
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Frontmatter field checks (name format, directory match, description).
    pub frontmatter: bool,
    /// Document-level checks (line count, forbidden files).
    pub structure: bool,
    /// Referenced-file resolution checks.
    pub references: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_skill_lines: 500,
            min_description_words: 20,
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            frontmatter: true,
            structure: true,
            references: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillcheck.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("skillcheck.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}

/// Root structure of a `.skillcheck-ignore` TOML file.
///
/// # File format
///
/// ```toml
/// [[suppress]]
/// rule = "refs/missing-file"
/// path = "scripts/generated.py"
/// reason = "Script is generated at install time"
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct SuppressionFile {
    /// One or more suppression entries.
    pub suppress: Vec<Suppression>,
}

/// A rule that silences a specific violation.
///
/// Suppressions live in `.skillcheck-ignore` files at the root of a skill
/// directory and are loaded by [`load_suppressions`].
///
/// # Matching
///
/// A suppression matches a [`Violation`](crate::violation::Violation) when:
/// - `rule` equals the violation's `rule_id`.
/// - `path` matches the violation's path (empty string acts as a wildcard).
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Suppression {
    /// Rule ID to suppress (e.g., `"refs/missing-file"`).
    pub rule: String,
    /// Relative path to match, or an empty string for all paths.
    #[serde(default)]
    pub path: String,
    /// Human-readable justification for the suppression.
    pub reason: String,
    /// Optional issue-tracker reference (e.g., `"JIRA-1234"`).
    pub ticket: Option<String>,
}

/// Loads suppression rules from a `.skillcheck-ignore` file.
///
/// Looks for the file in `skill_path` and parses it as TOML. Returns an empty
/// vector when the file is absent or cannot be parsed (a warning is printed to
/// stderr in the latter case).
pub fn load_suppressions(skill_path: &Path) -> Vec<Suppression> {
    let ignore_path = skill_path.join(".skillcheck-ignore");
    if !ignore_path.exists() {
        return vec![];
    }

    let content = match std::fs::read_to_string(&ignore_path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    match toml::from_str::<SuppressionFile>(&content) {
        Ok(file) => file.suppress,
        Err(e) => {
            eprintln!("Warning: failed to parse .skillcheck-ignore: {e}");
            vec![]
        }
    }
}
