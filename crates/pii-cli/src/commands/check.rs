use anyhow::{Context, Result};
use pii_config::Config;
use pii_core::{Category, Pii, Redaction, Redactor};
use serde::Serialize;
use std::path::PathBuf;

use super::redactor_for;

/// Findings for one input line (1-indexed)
#[derive(Debug, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub findings: Vec<Redaction>,
}

pub async fn handle(
    config: &Config,
    input: PathBuf,
    categories: Vec<Category>,
    json: bool,
) -> Result<()> {
    let redactor = redactor_for(config, categories);
    let texts = pii_io::read_pii(&input)
        .await
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let reports = scan_lines(&redactor, &texts);

    for report in &reports {
        if json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            let names: Vec<String> = report
                .findings
                .iter()
                .map(|finding| finding.category.to_string())
                .collect();
            println!("line {}: {}", report.line, names.join(", "));
        }
    }

    if !json {
        println!("{} of {} lines contain PII", reports.len(), texts.len());
    }

    Ok(())
}

/// Reports for the lines with at least one finding
pub fn scan_lines(redactor: &Redactor, texts: &[Pii]) -> Vec<LineReport> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let findings = redactor.scan(text);
            (!findings.is_empty()).then(|| LineReport {
                line: index + 1,
                findings,
            })
        })
        .collect()
}
