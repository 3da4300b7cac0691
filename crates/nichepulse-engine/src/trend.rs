//! Week-over-week trend classification.

use nichepulse_core::Trend;

/// Score movement that must be exceeded before a change counts as a trend.
pub const TREND_BAND: f64 = 5.0;

/// Classify the move from `previous` to `current`.
///
/// Returns `(Stable, 0.0)` when there is no previous score. Otherwise the
/// delta is `current - previous`, and only a delta strictly outside
/// `±TREND_BAND` is reported as `Up` or `Down`. A non-finite delta is
/// treated like a first measurement.
#[must_use]
pub fn classify_trend(current: f64, previous: Option<f64>) -> (Trend, f64) {
    let Some(previous) = previous else {
        return (Trend::Stable, 0.0);
    };

    let delta = current - previous;
    if !delta.is_finite() {
        return (Trend::Stable, 0.0);
    }

    let trend = if delta > TREND_BAND {
        Trend::Up
    } else if delta < -TREND_BAND {
        Trend::Down
    } else {
        Trend::Stable
    };

    (trend, delta)
}
