//! Competitor snapshot diff command handler.

use std::path::Path;

use nichepulse_core::{Competitor, Snapshot};

use crate::input::{print_json, read_json};

/// Diff two snapshot files for one competitor and print detected changes.
///
/// # Errors
///
/// Returns an error if any input file cannot be read or parsed.
pub(crate) async fn run_diff(
    competitor_path: &Path,
    previous_path: &Path,
    current_path: &Path,
) -> anyhow::Result<()> {
    let competitor: Competitor = read_json(competitor_path).await?;
    let previous: Snapshot = read_json(previous_path).await?;
    let current: Snapshot = read_json(current_path).await?;

    let changes = nichepulse_engine::detect_competitor_changes(&competitor, &previous, &current);
    if changes.is_empty() {
        tracing::info!(competitor = %competitor.name, "no significant changes detected");
    }
    print_json(&changes)
}
