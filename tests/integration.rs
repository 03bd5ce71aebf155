use assert_cmd::Command;
use predicates::prelude::*;

fn skillcheck() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("skillcheck")
}

#[test]
fn validate_clean_skill_passes() {
    skillcheck()
        .args(["validate", "tests/fixtures/clean-skill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill validation passed"))
        .stdout(predicate::str::contains("All checks passed:"));
}

#[test]
fn validate_dirty_skill_fails() {
    skillcheck()
        .args(["validate", "tests/fixtures/dirty-skill"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation failed:"))
        .stdout(predicate::str::contains("1. "));
}

#[test]
fn validate_dirty_skill_lists_every_problem() {
    // One run reports all independent violations: name format, directory
    // mismatch, short description, forbidden README, missing reference,
    // escaping reference.
    skillcheck()
        .args(["validate", "tests/fixtures/dirty-skill"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'Dirty_Skill' invalid"))
        .stdout(predicate::str::contains("doesn't match skill name"))
        .stdout(predicate::str::contains("Description too short"))
        .stdout(predicate::str::contains("Forbidden file found: README.md"))
        .stdout(predicate::str::contains(
            "Referenced file not found: scripts/missing.sh",
        ))
        .stdout(predicate::str::contains(
            "points outside skill directory: ../assets/logo.png",
        ));
}

#[test]
fn validate_dirty_skill_json_format() {
    skillcheck()
        .args(["validate", "tests/fixtures/dirty-skill", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"));
}

#[test]
fn validate_dirty_skill_sarif_format() {
    skillcheck()
        .args(["validate", "tests/fixtures/dirty-skill", "--format", "sarif"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""));
}

#[test]
fn validate_suppressed_skill_passes() {
    skillcheck()
        .args(["validate", "tests/fixtures/suppressed-skill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suppressed"));
}

#[test]
fn validate_nonexistent_path_exits_2() {
    skillcheck()
        .args(["validate", "tests/fixtures/does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn validate_file_path_exits_2() {
    skillcheck()
        .args(["validate", "tests/fixtures/clean-skill/SKILL.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn validate_collection_dir_shows_hint_and_exits_2() {
    // tests/fixtures/ has subdirs with SKILL.md but no top-level SKILL.md —
    // exactly the collection-directory pattern we want to detect.
    skillcheck()
        .args(["validate", "tests/fixtures"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "looks like a skills collection directory",
        ))
        .stderr(predicate::str::contains("validate-all"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("report.json");

    skillcheck()
        .args([
            "validate",
            "tests/fixtures/dirty-skill",
            "--format",
            "json",
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .code(1);

    let content = std::fs::read_to_string(&output_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Output file should contain valid JSON");
    assert!(!parsed["passed"].as_bool().unwrap());
}

#[test]
fn custom_config_relaxes_limits() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("skillcheck.toml");
    std::fs::write(
        &config_file,
        "[limits]\nmin_description_words = 2\n\n[checks]\nreferences = false\nstructure = false\n",
    )
    .unwrap();

    // dirty-skill still fails on name checks, but the description and
    // reference violations disappear.
    skillcheck()
        .args([
            "validate",
            "tests/fixtures/dirty-skill",
            "--config",
            config_file.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Description too short").not())
        .stdout(predicate::str::contains("Referenced file not found").not())
        .stdout(predicate::str::contains("Forbidden file found").not());
}

#[test]
fn missing_config_file_exits_2() {
    skillcheck()
        .args([
            "validate",
            "tests/fixtures/clean-skill",
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

// ── validate-all & collection-dir detection ──────────────────────────────────

#[test]
fn validate_all_discovers_skills_and_prints_summary() {
    skillcheck()
        .args(["validate-all", "tests/fixtures"])
        .assert()
        // dirty-skill fails — exit 1
        .code(1)
        .stdout(predicate::str::contains("Collection Summary"))
        .stdout(predicate::str::contains("3 skills"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn validate_all_exits_0_when_all_pass() {
    let dir = tempfile::tempdir().unwrap();
    for name in &["alpha-skill", "beta-skill"] {
        let skill_dir = dir.path().join(name);
        std::fs::create_dir_all(&skill_dir).unwrap();
        std::fs::write(
            skill_dir.join("SKILL.md"),
            format!(
                "---\nname: {name}\ndescription: >\n  Renders weekly status reports from the \
                 team tracker and posts them to the shared channel. Use when the user asks \
                 for a status report.\n---\n\n# {name}\n"
            ),
        )
        .unwrap();
    }

    skillcheck()
        .args(["validate-all", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection Summary"))
        .stdout(predicate::str::contains("2 skills"));
}

#[test]
fn validate_all_finds_nested_skills() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("group").join("gamma-skill");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        nested.join("SKILL.md"),
        "---\nname: gamma-skill\ndescription: >\n  Renders weekly status reports from the \
         team tracker and posts them to the shared channel. Use when the user asks for a \
         status report.\n---\n\n# gamma\n",
    )
    .unwrap();

    skillcheck()
        .args(["validate-all", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skills"));
}

#[test]
fn validate_all_empty_dir_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    skillcheck()
        .args(["validate-all", dir.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no skill directories found"));
}

#[test]
fn validate_all_nonexistent_path_exits_2() {
    skillcheck()
        .args(["validate-all", "tests/fixtures/does-not-exist"])
        .assert()
        .code(2);
}

// ── rule catalogue commands ──────────────────────────────────────────────────

#[test]
fn list_rules_shows_rules() {
    skillcheck()
        .args(["list-rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frontmatter/name-format"))
        .stdout(predicate::str::contains("refs/missing-file"))
        .stdout(predicate::str::contains("skill/forbidden-file"));
}

#[test]
fn explain_known_rule() {
    skillcheck()
        .args(["explain", "frontmatter/name-format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frontmatter/name-format"))
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_rule_exits_2() {
    skillcheck()
        .args(["explain", "nonexistent/rule"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule"));
}
