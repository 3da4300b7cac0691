//! Mock signal generation command handler.

use nichepulse_core::WeeklySignals;
use nichepulse_engine::mock::{generate_mock_signals, seeded_rng};

use crate::input::print_json;

/// Print `count` weeks of mock signals generated from `seed` as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn run_mock(seed: u64, count: usize) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let weeks: Vec<WeeklySignals> = (0..count)
        .map(|_| generate_mock_signals(&mut rng))
        .collect();
    print_json(&weeks)
}
