use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub headline: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Days the ad has been running, when the ad network reports it.
    #[serde(default)]
    pub run_days: Option<i64>,
}

/// One competitor's active ad set captured during a single poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub competitor_id: Uuid,
    #[serde(default)]
    pub active_ads_count: i64,
    #[serde(default)]
    pub ads: Vec<Ad>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    NewCampaign,
    CampaignEnded,
    AdSpike,
    CreativeShift,
    MessagingChange,
    PricingChange,
    NewFeature,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChangeType::NewCampaign => "new_campaign",
            ChangeType::CampaignEnded => "campaign_ended",
            ChangeType::AdSpike => "ad_spike",
            ChangeType::CreativeShift => "creative_shift",
            ChangeType::MessagingChange => "messaging_change",
            ChangeType::PricingChange => "pricing_change",
            ChangeType::NewFeature => "new_feature",
        };
        f.write_str(s)
    }
}

/// How alert-worthy a detected change is. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Significance::Low => write!(f, "low"),
            Significance::Medium => write!(f, "medium"),
            Significance::High => write!(f, "high"),
        }
    }
}

/// A change detected between two consecutive snapshots of one competitor.
///
/// `data` carries the rule-specific payload (affected ads, counts, percent
/// change) for alert rendering downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorChange {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub competitor_id: Uuid,
    pub detected_at: DateTime<Utc>,
    pub data: serde_json::Value,
    pub significance: Significance,
}
