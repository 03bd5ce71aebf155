use crate::validator;
use crate::violation::{ValidationReport, Violation};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &ValidationReport) -> String {
    let all_violations: Vec<&Violation> = report
        .violations
        .iter()
        .chain(report.suppressed.iter())
        .collect();

    let catalogue = validator::rules();

    // Collect unique rules in deterministic order
    let mut rule_ids: Vec<&str> = all_violations.iter().map(|v| v.rule_id.as_str()).collect();
    rule_ids.sort();
    rule_ids.dedup();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            if let Some(info) = catalogue.iter().find(|r| r.id == *id) {
                rule.short_description = Some(
                    MultiformatMessageString::builder()
                        .text(info.message.to_string())
                        .build(),
                );
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(info.remediation.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = all_violations
        .iter()
        .map(|v| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(v.message.clone()).build())
                .build();

            result.rule_id = Some(v.rule_id.clone());
            // Every violation fails validation — there are no severity tiers.
            result.level = Some(ResultLevel::Error);
            result.rule_index = rule_index.get(v.rule_id.as_str()).copied();

            if let Some(ref path) = v.path {
                let uri = path.to_string_lossy().replace('\\', "/");

                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();
                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("skillcheck")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
