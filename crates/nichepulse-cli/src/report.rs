//! Markdown demand report command handler.

use std::path::Path;

use chrono::Utc;
use nichepulse_core::WeeklyScore;

use crate::input::read_json;

/// Print a markdown demand report for `niche` from a history file.
///
/// # Errors
///
/// Returns an error if the history file cannot be read or parsed.
pub(crate) async fn run_report(niche: &str, history_path: &Path) -> anyhow::Result<()> {
    let history: Vec<WeeklyScore> = read_json(history_path).await?;
    print!(
        "{}",
        nichepulse_engine::render_demand_report(niche, &history, Utc::now())
    );
    Ok(())
}
