//! Validation and ordering of extracted market gaps.

use nichepulse_core::GapOpportunity;

use crate::error::GapValidationError;

/// Check that a gap's score and confidence are finite and in range.
///
/// # Errors
///
/// Returns the first failing bound as a [`GapValidationError`].
pub fn validate_gap(gap: &GapOpportunity) -> Result<(), GapValidationError> {
    if !(0.0..=100.0).contains(&gap.opportunity_score) {
        return Err(GapValidationError::OpportunityScoreOutOfRange(
            gap.opportunity_score,
        ));
    }
    if !(0.0..=1.0).contains(&gap.confidence) {
        return Err(GapValidationError::ConfidenceOutOfRange(gap.confidence));
    }
    Ok(())
}

/// Drop invalid gaps and order the rest for display.
///
/// Highest `opportunity_score` first, then highest `confidence`; remaining
/// ties keep their input order. Invalid records are logged and skipped so one
/// malformed extraction cannot block the batch.
#[must_use]
pub fn rank_gaps(gaps: Vec<GapOpportunity>) -> Vec<GapOpportunity> {
    let input_len = gaps.len();

    let mut ranked: Vec<GapOpportunity> = gaps
        .into_iter()
        .enumerate()
        .filter_map(|(index, gap)| match validate_gap(&gap) {
            Ok(()) => Some(gap),
            Err(e) => {
                tracing::warn!(
                    index,
                    title = %gap.title,
                    error = %e,
                    "dropping invalid gap opportunity"
                );
                None
            }
        })
        .collect();

    // `sort_by` is stable, which keeps equal keys in insertion order.
    ranked.sort_by(|a, b| {
        sort_key(b.opportunity_score)
            .total_cmp(&sort_key(a.opportunity_score))
            .then_with(|| sort_key(b.confidence).total_cmp(&sort_key(a.confidence)))
    });

    tracing::debug!(
        received = input_len,
        ranked = ranked.len(),
        "ranked gap opportunities"
    );

    ranked
}

/// Folds `-0.0` into `0.0` so `total_cmp` treats the two zeros as equal.
fn sort_key(value: f64) -> f64 {
    value + 0.0
}
