//! # skillcheck
//!
//! Structure and frontmatter validation for AI agent skill directories.
//!
//! `skillcheck` inspects a skill directory for a well-formed `SKILL.md`
//! document: required frontmatter fields, name/directory agreement, a
//! comprehensive description, document length, forbidden companion files,
//! and resolvable referenced files. Reports are rendered as human-readable
//! text, JSON, or [SARIF].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::{config::Config, output, validator};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = validator::run_validation(Path::new("./my-skill"), &config);
//!
//! if report.passed {
//!     println!("Validation passed!");
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** — load configuration and suppression rules from TOML files.
//! 2. **[`frontmatter`]** — split `SKILL.md` into frontmatter and body regions
//!    and extract field values from the constrained YAML dialect.
//! 3. **[`references`]** — collect referenced file paths from the body.
//! 4. **[`validator`]** — run the rule checklist and collect violations.
//! 5. **[`violation`]** — core data types ([`violation::Violation`],
//!    [`violation::ValidationReport`]).
//! 6. **[`output`]** — format reports as pretty text, JSON, or SARIF.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod frontmatter;
pub mod output;
pub mod references;
pub mod validator;
pub mod violation;
