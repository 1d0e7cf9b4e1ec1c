use anyhow::{Context, Result};
use pii_config::Config;
use pii_core::{Category, Pii, Redactor};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::redactor_for;

pub async fn handle(
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    categories: Vec<Category>,
) -> Result<()> {
    let redactor = redactor_for(config, categories);
    let texts = pii_io::read_pii(&input)
        .await
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let (scrubbed, totals) = scrub_lines(&redactor, &texts);

    let output = output.unwrap_or_else(|| config.output_path(&input));
    let count = pii_io::write_data(&output, &scrubbed)
        .await
        .with_context(|| format!("Failed to save {}", output.display()))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        lines = count,
        redactions = totals.values().sum::<usize>(),
        "scrubbed file"
    );

    println!("✓ Wrote {} lines to {}", count, output.display());
    for (category, total) in &totals {
        println!("  {}: {}", category, total);
    }

    Ok(())
}

/// Anonymized lines plus redaction totals per category
pub fn scrub_lines(redactor: &Redactor, texts: &[Pii]) -> (Vec<Pii>, BTreeMap<Category, usize>) {
    let mut totals = BTreeMap::new();
    let scrubbed = texts
        .iter()
        .map(|text| {
            let (clean, redactions) = redactor.redact(text);
            for redaction in redactions {
                *totals.entry(redaction.category).or_insert(0) += redaction.count;
            }
            clean
        })
        .collect();

    (scrubbed, totals)
}
