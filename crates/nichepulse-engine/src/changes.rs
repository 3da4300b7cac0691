//! Change detection between two consecutive competitor snapshots.
//!
//! Three independent rules run in a fixed order (new campaigns, ended
//! campaigns, ad-volume spike). Each rule yields at most one change.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use nichepulse_core::{Ad, ChangeType, Competitor, CompetitorChange, Significance, Snapshot};
use serde_json::json;

/// More new ads than this in one cycle is a high-significance launch.
pub const NEW_CAMPAIGN_HIGH_THRESHOLD: usize = 5;
/// Only stopped ads that ran longer than this many days are reported.
pub const ENDED_CAMPAIGN_MIN_RUN_DAYS: i64 = 30;
/// Percent increase in active ads that must be exceeded to flag a spike.
pub const AD_SPIKE_PERCENT_THRESHOLD: f64 = 50.0;

/// Detect changes between `previous` and `current`, stamped with the current time.
#[must_use]
pub fn detect_competitor_changes(
    competitor: &Competitor,
    previous: &Snapshot,
    current: &Snapshot,
) -> Vec<CompetitorChange> {
    detect_competitor_changes_at(competitor, previous, current, Utc::now())
}

/// Detect changes between `previous` and `current`, stamped with `detected_at`.
#[must_use]
pub fn detect_competitor_changes_at(
    competitor: &Competitor,
    previous: &Snapshot,
    current: &Snapshot,
    detected_at: DateTime<Utc>,
) -> Vec<CompetitorChange> {
    for snapshot in [previous, current] {
        if snapshot.competitor_id != competitor.id {
            tracing::warn!(
                competitor_id = %competitor.id,
                snapshot_competitor_id = %snapshot.competitor_id,
                "snapshot belongs to a different competitor; attributing changes to the caller's competitor"
            );
        }
    }

    let changes: Vec<CompetitorChange> = [
        detect_new_campaigns(previous, current),
        detect_ended_campaigns(previous, current),
        detect_ad_spike(previous, current),
    ]
    .into_iter()
    .flatten()
    .map(|(change_type, significance, data)| CompetitorChange {
        change_type,
        competitor_id: competitor.id,
        detected_at,
        data,
        significance,
    })
    .collect();

    tracing::debug!(
        competitor = %competitor.name,
        changes = changes.len(),
        "diffed competitor snapshots"
    );

    changes
}

type Detection = (ChangeType, Significance, serde_json::Value);

/// Ads present in `from` whose id does not appear in `against`.
fn missing_from<'a>(from: &'a Snapshot, against: &Snapshot) -> Vec<&'a Ad> {
    let ids: HashSet<&str> = against.ads.iter().map(|ad| ad.id.as_str()).collect();
    let mut seen = HashSet::new();
    from.ads
        .iter()
        .filter(|ad| !ids.contains(ad.id.as_str()) && seen.insert(ad.id.as_str()))
        .collect()
}

fn detect_new_campaigns(previous: &Snapshot, current: &Snapshot) -> Option<Detection> {
    let new_ads = missing_from(current, previous);
    if new_ads.is_empty() {
        return None;
    }

    let significance = if new_ads.len() > NEW_CAMPAIGN_HIGH_THRESHOLD {
        Significance::High
    } else {
        Significance::Medium
    };

    let ads: Vec<_> = new_ads
        .iter()
        .map(|ad| json!({ "id": ad.id, "headline": ad.headline }))
        .collect();

    Some((
        ChangeType::NewCampaign,
        significance,
        json!({ "new_ads_count": new_ads.len(), "ads": ads }),
    ))
}

fn detect_ended_campaigns(previous: &Snapshot, current: &Snapshot) -> Option<Detection> {
    let winners: Vec<&Ad> = missing_from(previous, current)
        .into_iter()
        .filter(|ad| ad.run_days.is_some_and(|d| d > ENDED_CAMPAIGN_MIN_RUN_DAYS))
        .collect();
    if winners.is_empty() {
        return None;
    }

    let ads: Vec<_> = winners
        .iter()
        .map(|ad| json!({ "id": ad.id, "headline": ad.headline, "run_days": ad.run_days }))
        .collect();

    Some((
        ChangeType::CampaignEnded,
        Significance::Medium,
        json!({ "ended_ads_count": winners.len(), "ads": ads }),
    ))
}

fn detect_ad_spike(previous: &Snapshot, current: &Snapshot) -> Option<Detection> {
    let previous_count = previous.active_ads_count.max(0);
    let current_count = current.active_ads_count.max(0);
    if previous_count == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let percent_change =
        (current_count - previous_count) as f64 * 100.0 / previous_count as f64;
    if percent_change <= AD_SPIKE_PERCENT_THRESHOLD {
        return None;
    }

    Some((
        ChangeType::AdSpike,
        Significance::High,
        json!({
            "previous_count": previous_count,
            "current_count": current_count,
            "percent_change": percent_change,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    fn competitor() -> Competitor {
        Competitor {
            id: Uuid::from_u128(7),
            name: "Acme Invoicing".to_owned(),
        }
    }

    fn ad(id: &str, run_days: Option<i64>) -> Ad {
        Ad {
            id: id.to_owned(),
            headline: format!("Headline {id}"),
            body: None,
            run_days,
        }
    }

    fn snapshot(active_ads_count: i64, ads: Vec<Ad>) -> Snapshot {
        Snapshot {
            competitor_id: Uuid::from_u128(7),
            active_ads_count,
            ads,
        }
    }

    fn ads(prefix: &str, n: usize) -> Vec<Ad> {
        (0..n).map(|i| ad(&format!("{prefix}-{i}"), Some(1))).collect()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
    }

    fn detect(previous: &Snapshot, current: &Snapshot) -> Vec<CompetitorChange> {
        detect_competitor_changes_at(&competitor(), previous, current, at())
    }

    #[test]
    fn identical_snapshots_produce_nothing() {
        let s = snapshot(3, ads("a", 3));
        assert!(detect(&s, &s).is_empty());
    }

    #[test]
    fn three_new_ads_is_medium() {
        let previous = snapshot(0, vec![]);
        let current = snapshot(0, ads("n", 3));
        let changes = detect(&previous, &current);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::NewCampaign);
        assert_eq!(changes[0].significance, Significance::Medium);
        assert_eq!(changes[0].data["new_ads_count"], 3);
    }

    #[test]
    fn seven_new_ads_is_high() {
        let previous = snapshot(0, vec![]);
        let current = snapshot(0, ads("n", 7));
        let changes = detect(&previous, &current);
        assert_eq!(changes[0].significance, Significance::High);
    }

    #[test]
    fn five_new_ads_is_still_medium() {
        let changes = detect(&snapshot(0, vec![]), &snapshot(0, ads("n", 5)));
        assert_eq!(changes[0].significance, Significance::Medium);
    }

    #[test]
    fn short_lived_stopped_ad_is_ignored() {
        let previous = snapshot(0, vec![ad("old", Some(20))]);
        let current = snapshot(0, vec![]);
        assert!(detect(&previous, &current).is_empty());
    }

    #[test]
    fn long_running_stopped_ad_is_reported() {
        let previous = snapshot(0, vec![ad("winner", Some(45)), ad("dud", Some(3))]);
        let current = snapshot(0, vec![]);
        let changes = detect(&previous, &current);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::CampaignEnded);
        assert_eq!(changes[0].significance, Significance::Medium);
        assert_eq!(changes[0].data["ended_ads_count"], 1);
        assert_eq!(changes[0].data["ads"][0]["id"], "winner");
    }

    #[test]
    fn stopped_ad_without_run_days_is_ignored() {
        let previous = snapshot(0, vec![ad("unknown", None)]);
        assert!(detect(&previous, &snapshot(0, vec![])).is_empty());
    }

    #[test]
    fn sixty_percent_increase_is_spike() {
        let changes = detect(&snapshot(10, vec![]), &snapshot(16, vec![]));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::AdSpike);
        assert_eq!(changes[0].significance, Significance::High);
        assert_eq!(changes[0].data["percent_change"], 60.0);
    }

    #[test]
    fn forty_percent_increase_is_not_spike() {
        assert!(detect(&snapshot(10, vec![]), &snapshot(14, vec![])).is_empty());
    }

    #[test]
    fn exactly_fifty_percent_is_not_spike() {
        assert!(detect(&snapshot(10, vec![]), &snapshot(15, vec![])).is_empty());
    }

    #[test]
    fn zero_baseline_skips_spike() {
        assert!(detect(&snapshot(0, vec![]), &snapshot(40, vec![])).is_empty());
    }

    #[test]
    fn negative_counts_are_treated_as_zero() {
        assert!(detect(&snapshot(-5, vec![]), &snapshot(40, vec![])).is_empty());
    }

    #[test]
    fn rules_run_in_order() {
        let previous = snapshot(4, vec![ad("winner", Some(90))]);
        let current = snapshot(10, ads("n", 2));
        let kinds: Vec<ChangeType> = detect(&previous, &current)
            .into_iter()
            .map(|c| c.change_type)
            .collect();
        assert_eq!(
            kinds,
            [
                ChangeType::NewCampaign,
                ChangeType::CampaignEnded,
                ChangeType::AdSpike
            ]
        );
    }

    #[test]
    fn changes_carry_competitor_and_timestamp() {
        let changes = detect(&snapshot(0, vec![]), &snapshot(0, ads("n", 1)));
        assert_eq!(changes[0].competitor_id, Uuid::from_u128(7));
        assert_eq!(changes[0].detected_at, at());
    }

    #[test]
    fn duplicate_ad_ids_count_once() {
        let current = snapshot(0, vec![ad("dup", None), ad("dup", None)]);
        let changes = detect(&snapshot(0, vec![]), &current);
        assert_eq!(changes[0].data["new_ads_count"], 1);
    }

    #[test]
    fn mismatched_snapshot_uses_callers_competitor() {
        let mut current = snapshot(0, ads("n", 1));
        current.competitor_id = Uuid::from_u128(99);
        let changes = detect(&snapshot(0, vec![]), &current);
        assert_eq!(changes[0].competitor_id, competitor().id);
    }
}
