use thiserror::Error;

/// Why a gap record was excluded from ranked output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GapValidationError {
    #[error("opportunity_score {0} is outside [0, 100]")]
    OpportunityScoreOutOfRange(f64),

    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}
