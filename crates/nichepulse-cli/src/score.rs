//! Demand scoring command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use futures::stream::{self, StreamExt};
use nichepulse_core::{DemandMetrics, WeeklySignals};
use nichepulse_engine::{DemandScorer, LexicalMatcher};
use serde::Serialize;

use crate::input::{print_json, read_json};

#[derive(Debug, Serialize)]
struct BatchRow {
    niche: String,
    #[serde(flatten)]
    metrics: DemandMetrics,
}

/// Score a single signals file and print the metrics as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) async fn run_score(
    scorer: &DemandScorer<LexicalMatcher>,
    path: &Path,
) -> anyhow::Result<()> {
    let signals: WeeklySignals = read_json(path).await?;
    let metrics = scorer.score(&signals);
    print_json(&metrics)
}

/// Score every `*.json` file in `dir`, at most `concurrency` at a time.
///
/// The file stem is used as the niche name. Files that fail to read or parse
/// are logged and skipped; the command only fails if every file fails.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or no file could be scored.
pub(crate) async fn run_batch(
    scorer: DemandScorer<LexicalMatcher>,
    dir: &Path,
    concurrency: usize,
) -> anyhow::Result<()> {
    let files = list_signal_files(dir).await?;
    if files.is_empty() {
        println!("no *.json signal files found in {}", dir.display());
        return Ok(());
    }

    let scorer = Arc::new(scorer);
    let file_count = files.len();
    let max_concurrent = concurrency.max(1);

    let results: Vec<(String, anyhow::Result<DemandMetrics>)> = stream::iter(files)
        .map(|path| {
            let scorer = Arc::clone(&scorer);
            async move {
                let niche = niche_name(&path);
                let outcome = score_file(scorer, &path).await;
                (niche, outcome)
            }
        })
        .buffer_unordered(max_concurrent)
        .collect()
        .await;

    let mut rows = Vec::with_capacity(results.len());
    let mut failed: usize = 0;
    for (niche, outcome) in results {
        match outcome {
            Ok(metrics) => rows.push(BatchRow { niche, metrics }),
            Err(e) => {
                tracing::error!(niche = %niche, error = %format!("{e:#}"), "failed to score niche");
                failed += 1;
            }
        }
    }

    if failed == file_count {
        anyhow::bail!("all {failed} signal files failed to score");
    }
    if failed > 0 {
        tracing::warn!(failed, total = file_count, "some niches failed to score");
    }

    rows.sort_by(|a, b| a.niche.cmp(&b.niche));
    print_json(&rows)
}

/// Read one signals file and score it on the blocking pool.
async fn score_file(
    scorer: Arc<DemandScorer<LexicalMatcher>>,
    path: &Path,
) -> anyhow::Result<DemandMetrics> {
    let signals: WeeklySignals = read_json(path).await?;
    let metrics = tokio::task::spawn_blocking(move || scorer.score(&signals)).await?;
    Ok(metrics)
}

/// `*.json` files directly inside `dir`, sorted by path.
async fn list_signal_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to list signal directory {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") && entry.file_type().await?.is_file()
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn niche_name(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
