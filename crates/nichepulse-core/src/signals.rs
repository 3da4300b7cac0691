use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated evidence for one niche for one week.
///
/// Built by the collectors and consumed once by the demand scorer. Every
/// sub-structure defaults to empty, so a payload missing `forums` (say)
/// scores as if no forum activity was observed. Counts are signed so that a
/// malformed negative value still deserializes; the engine treats it as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySignals {
    pub ads: AdSignals,
    pub search: SearchSignals,
    pub mentions: MentionSignals,
    pub forums: ForumSignals,
    pub competitors: CompetitorSignals,
    /// Demand score from the prior week. `None` on the first measurement.
    pub previous_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdSignals {
    pub advertiser_count: i64,
    pub avg_longevity_days: f64,
    pub top_angles: Vec<String>,
    pub top_offers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSignals {
    pub buyer_intent_keywords: Vec<IntentKeyword>,
    pub total_volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentKeyword {
    pub keyword: String,
    #[serde(default)]
    pub volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionSignals {
    pub current_week_count: i64,
    pub previous_week_count: i64,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumSignals {
    pub complaints: Vec<ForumItem>,
    pub desires: Vec<ForumItem>,
    pub purchase_triggers: i64,
}

/// A recurring complaint or desire and how often it was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumItem {
    pub text: String,
    #[serde(default)]
    pub frequency: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorSignals {
    pub active_competitors: i64,
    pub pricing_changes: Vec<serde_json::Value>,
    pub feature_changes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Scores produced for one niche-week. Serialized with the persisted column names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandMetrics {
    /// 0-100 composite market pull.
    pub demand_score: f64,
    /// 0-100 blend of demand and white space.
    pub opportunity_score: f64,
    /// 0-100 lexical overlap between ad messaging and forum pain.
    #[serde(rename = "message_market_fit_score")]
    pub message_market_fit: f64,
    pub trend: Trend,
    /// `demand_score - previous_score`, or `0.0` on the first measurement.
    #[serde(rename = "demand_score_change")]
    pub trend_delta: f64,
}

/// One row of a niche's score history, as fed to the markdown report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyScore {
    pub week_of: NaiveDate,
    pub metrics: DemandMetrics,
}
