//! Gap ranking command handler.

use std::path::Path;

use nichepulse_core::GapOpportunity;

use crate::input::{print_json, read_json};

/// Rank the gaps in a JSON file and print the surviving records in order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of gaps.
pub(crate) async fn run_rank_gaps(path: &Path) -> anyhow::Result<()> {
    let gaps: Vec<GapOpportunity> = read_json(path).await?;
    let received = gaps.len();
    let ranked = nichepulse_engine::rank_gaps(gaps);
    if ranked.len() < received {
        tracing::info!(
            dropped = received - ranked.len(),
            "some gap records failed validation"
        );
    }
    print_json(&ranked)
}
