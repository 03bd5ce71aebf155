use clap::{Parser, Subcommand};
use skillcheck::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Structure and frontmatter validation for AI agent skills"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a skill directory
    Validate {
        /// Path to the skill directory
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate all skill directories inside a collection directory
    #[command(name = "validate-all")]
    ValidateAll {
        /// Path to a directory containing skill subdirectories
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all validation rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "frontmatter/name-format")
        rule_id: String,
    },
}
