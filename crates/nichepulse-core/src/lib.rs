//! Shared data model and configuration for NichePulse.
//!
//! The types here are the contract between external collectors and the
//! scoring engine in `nichepulse-engine`. Field names match the persisted
//! schema (`demand_score`, `demand_score_change`, ...).

mod app_config;
mod competitors;
mod config;
mod gaps;
mod scoring;
mod signals;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use competitors::{Ad, ChangeType, Competitor, CompetitorChange, Significance, Snapshot};
pub use config::{load_app_config, load_app_config_from_env};
pub use gaps::{Evidence, GapOpportunity, GapType};
pub use scoring::{load_scoring_config, ScoringConfig};
pub use signals::{
    AdSignals, CompetitorSignals, DemandMetrics, ForumItem, ForumSignals, IntentKeyword,
    MentionSignals, SearchSignals, Trend, WeeklyScore, WeeklySignals,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read scoring config at {path}: {source}")]
    ScoringFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scoring config: {0}")]
    ScoringFileParse(#[source] serde_yaml::Error),

    #[error("scoring config validation failed: {0}")]
    Validation(String),
}
