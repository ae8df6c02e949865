use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::model::KeywordStats;

/// Default number of keywords kept in the generated stats file.
pub const DEFAULT_TOP: usize = 30;

/// Build `keyword_stats.json` from a concept export: each input line is one
/// record's comma-separated concept list.
pub fn generate_keyword_stats(input: &Path, output: &Path, top: usize) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read concept export: {}", input.display()))?;
    let stats = count_concepts(raw.lines(), top);
    info!(
        keywords = stats.top_keywords.len(),
        output = %output.display(),
        "writing keyword stats"
    );
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&stats)?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write keyword stats: {}", output.display()))?;
    Ok(())
}

/// Count comma-separated concepts across records and keep the `top` most
/// frequent. Ties order alphabetically so output is deterministic.
pub fn count_concepts<'a>(records: impl Iterator<Item = &'a str>, top: usize) -> KeywordStats {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        for concept in record.split(',') {
            let concept = concept.trim();
            if concept.is_empty() {
                continue;
            }
            *counts.entry(concept.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top);

    KeywordStats {
        top_keywords: ranked.iter().map(|(k, _)| k.clone()).collect(),
        top_counts: ranked.iter().map(|(_, n)| *n).collect(),
    }
}
