//! Signal scoring and change detection for NichePulse.
//!
//! Turns weekly market signals into bounded composite scores, classifies
//! week-over-week trend direction, ranks extracted market gaps, and diffs
//! consecutive competitor snapshots. Every entry point is a pure function
//! over its input: no I/O, no shared state, safe to call from any thread.

pub mod changes;
pub mod error;
pub mod forum;
pub mod gaps;
pub mod matcher;
pub mod mock;
pub mod report;
pub mod scorer;
pub mod trend;

pub use changes::{detect_competitor_changes, detect_competitor_changes_at};
pub use error::GapValidationError;
pub use gaps::{rank_gaps, validate_gap};
pub use matcher::{LexicalMatcher, SignalMatcher};
pub use report::render_demand_report;
pub use scorer::{calculate_demand_score, DemandScorer};
pub use trend::classify_trend;
