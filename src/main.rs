mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use rayon::prelude::*;
use skillcheck::{config, output, validator, violation::ValidationReport};
use walkdir::WalkDir;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            path,
            format,
            output: output_path,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }
            if !path.is_dir() {
                eprintln!("Error: not a directory: {}", path.display());
                std::process::exit(2);
            }

            // Detect collection directories early to give a helpful error rather
            // than a confusing "SKILL.md not found" violation.
            let skill_children = find_skill_dirs(&path);
            if !path.join("SKILL.md").exists() && !skill_children.is_empty() {
                eprintln!(
                    "Error: '{}' looks like a skills collection directory, not a single skill.",
                    path.display()
                );
                eprintln!();
                eprintln!("To validate all skills at once:");
                eprintln!("  skillcheck validate-all {}", path.display());
                eprintln!();
                eprintln!("To validate a specific skill:");
                for child in &skill_children {
                    eprintln!("  skillcheck validate {}", child.display());
                }
                std::process::exit(2);
            }

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let report = validator::run_validation(&path, &config);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::ValidateAll {
            path,
            format,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let skill_dirs = find_skill_dirs(&path);
            if skill_dirs.is_empty() {
                eprintln!(
                    "Error: no skill directories found in '{}' (no subdirectory contains a SKILL.md)",
                    path.display()
                );
                std::process::exit(2);
            }

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            // Validation is read-only and per-directory, so skills can be
            // checked in parallel.
            let reports: Vec<ValidationReport> = skill_dirs
                .par_iter()
                .map(|skill_dir| validator::run_validation(skill_dir, &config))
                .collect();

            for report in &reports {
                print!("{}", output::format_report(report, &format));
            }

            if matches!(format, output::OutputFormat::Pretty) {
                print!("{}", format_collection_summary(&path, &reports));
            }

            let all_passed = reports.iter().all(|r| r.passed);
            std::process::exit(if all_passed { 0 } else { 1 });
        }

        Commands::ListRules => {
            let rules = validator::rules();
            println!("{}", "Validation Rules".bold().underline());
            println!();

            for rule in &rules {
                println!("  {id:<34} {message}", id = rule.id, message = rule.message);
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => {
            let rules = validator::rules();
            match rules.iter().find(|r| r.id == rule_id) {
                Some(rule) => {
                    println!("{}", rule.id.bold());
                    println!();
                    println!("  Description:  {}", rule.message);
                    println!("  Remediation:  {}", rule.remediation);
                }
                None => {
                    eprintln!("Unknown rule: {rule_id}");
                    eprintln!("Use 'skillcheck list-rules' to see all available rules.");
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Returns every directory under `path` that contains a `SKILL.md` file,
/// discovered recursively and sorted by path.
fn find_skill_dirs(path: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut dirs: Vec<std::path::PathBuf> = WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_type().is_dir())
        .filter_map(|e| e.ok())
        .filter(|e| e.path().join("SKILL.md").is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    dirs.sort();
    dirs
}

/// Renders a compact summary table after all individual skill reports have been printed.
fn format_collection_summary(
    collection_path: &std::path::Path,
    reports: &[ValidationReport],
) -> String {
    let mut out = String::new();
    let separator = "─".repeat(54);

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!(
            "  Collection Summary: {}  ({} skills)",
            collection_path.display(),
            reports.len()
        )
        .bold()
        .underline()
    ));
    out.push_str(&format!("{}\n", separator.dimmed()));

    let mut n_failed = 0usize;
    let mut n_passed = 0usize;

    for report in reports {
        let (icon, status_str) = if report.passed {
            n_passed += 1;
            ("✓".green().to_string(), "PASSED".green().bold().to_string())
        } else {
            n_failed += 1;
            ("✗".red().to_string(), "FAILED".red().bold().to_string())
        };

        out.push_str(&format!(
            "  {icon}  {name:<22} {status}  {v} violations, {s} suppressed\n",
            name = report.skill,
            status = status_str,
            v = report.violations.len(),
            s = report.suppressed.len(),
        ));
    }

    out.push_str(&format!("{}\n", separator.dimmed()));
    out.push_str(&format!(
        "  Total: {}  {}\n",
        format!("{} failed", n_failed).red().bold(),
        format!("{} passed", n_passed).green().bold(),
    ));

    out
}
