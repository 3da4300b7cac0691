use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapType {
    Product,
    Offer,
    Positioning,
    Trust,
    Pricing,
}

/// A quoted ad or forum post backing a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    pub snippet: String,
}

/// A market gap produced by the extraction stage.
///
/// The text fields are opaque to the engine: ranking reorders and filters
/// these records but never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapOpportunity {
    pub gap_type: GapType,
    pub title: String,
    pub problem: String,
    pub recommendation: String,
    #[serde(default)]
    pub evidence_ads: Vec<Evidence>,
    #[serde(default)]
    pub evidence_reddit: Vec<Evidence>,
    /// Expected in `[0, 100]`.
    pub opportunity_score: f64,
    /// Expected in `[0, 1]`.
    pub confidence: f64,
}
