//! Plausible synthetic signals for fixtures and demos.
//!
//! Randomness always comes from the caller so runs are reproducible; use
//! [`seeded_rng`] for a deterministic source.

use nichepulse_core::{
    AdSignals, CompetitorSignals, ForumItem, ForumSignals, IntentKeyword, MentionSignals,
    SearchSignals, WeeklySignals,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ANGLES: &[&str] = &[
    "Get paid twice as fast",
    "Stop chasing late invoices",
    "Bookkeeping without the spreadsheets",
    "Built for solo freelancers",
    "Taxes handled automatically",
];

const OFFERS: &[&str] = &[
    "Free 30-day trial",
    "50% off the first three months",
    "Free invoice templates",
    "No credit card required",
];

const COMPLAINTS: &[&str] = &[
    "Clients always pay invoices late",
    "Current accounting tools are too expensive",
    "Spreadsheets take forever every month",
    "Tax season is confusing and overwhelming",
];

const DESIRES: &[&str] = &[
    "Automatic payment reminders",
    "One dashboard for invoices and taxes",
    "Cheaper plan for freelancers",
];

const KEYWORDS: &[&str] = &[
    "best invoicing app",
    "freshbooks alternative",
    "quickbooks vs xero",
    "invoice software pricing",
    "invoice generator",
    "freelance bookkeeping",
];

const SOURCES: &[&str] = &["reddit", "hackernews", "producthunt", "app_store"];

/// A deterministic random source for the given seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate one week of plausible signals from `rng`.
pub fn generate_mock_signals<R: Rng + ?Sized>(rng: &mut R) -> WeeklySignals {
    let previous_week_count: i64 = rng.random_range(0..=400);
    let current_week_count = (previous_week_count + rng.random_range(-50..=250)).max(0);

    WeeklySignals {
        ads: AdSignals {
            advertiser_count: rng.random_range(0..=80),
            avg_longevity_days: rng.random_range(0.0..=120.0),
            top_angles: pick(rng, ANGLES, 3),
            top_offers: pick(rng, OFFERS, 2),
        },
        search: {
            let buyer_intent_keywords: Vec<IntentKeyword> = pick(rng, KEYWORDS, 4)
                .into_iter()
                .map(|keyword| IntentKeyword {
                    keyword,
                    volume: rng.random_range(50..=5_000),
                })
                .collect();
            let intent_total: i64 = buyer_intent_keywords.iter().map(|k| k.volume).sum();
            SearchSignals {
                buyer_intent_keywords,
                total_volume: intent_total + rng.random_range(0..=20_000),
            }
        },
        mentions: MentionSignals {
            current_week_count,
            previous_week_count,
            sources: pick(rng, SOURCES, 3),
        },
        forums: ForumSignals {
            complaints: items(rng, COMPLAINTS, 3),
            desires: items(rng, DESIRES, 2),
            purchase_triggers: rng.random_range(0..=30),
        },
        competitors: CompetitorSignals {
            active_competitors: rng.random_range(0..=60),
            pricing_changes: Vec::new(),
            feature_changes: Vec::new(),
        },
        previous_score: rng
            .random_bool(0.7)
            .then(|| rng.random_range(0.0..=100.0)),
    }
}

/// Up to `max` distinct entries of `pool`, at least one.
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str], max: usize) -> Vec<String> {
    let n = rng.random_range(1..=max.min(pool.len()));
    let start = rng.random_range(0..pool.len());
    (0..n)
        .map(|i| pool[(start + i) % pool.len()].to_string())
        .collect()
}

fn items<R: Rng + ?Sized>(rng: &mut R, pool: &[&str], max: usize) -> Vec<ForumItem> {
    pick(rng, pool, max)
        .into_iter()
        .map(|text| ForumItem {
            text,
            frequency: rng.random_range(1..=60),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_signals() {
        let a = generate_mock_signals(&mut seeded_rng(42));
        let b = generate_mock_signals(&mut seeded_rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sequence_from_one_rng_varies() {
        let mut rng = seeded_rng(7);
        let batch: Vec<WeeklySignals> = (0..8).map(|_| generate_mock_signals(&mut rng)).collect();
        assert!(batch.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn generated_counts_are_non_negative() {
        let mut rng = seeded_rng(1234);
        for _ in 0..200 {
            let s = generate_mock_signals(&mut rng);
            assert!(s.ads.advertiser_count >= 0);
            assert!(s.ads.avg_longevity_days >= 0.0);
            assert!(s.mentions.current_week_count >= 0);
            assert!(s.competitors.active_competitors >= 0);
            assert!(!s.ads.top_angles.is_empty());
            assert!(s.search.total_volume
                >= s.search.buyer_intent_keywords.iter().map(|k| k.volume).sum::<i64>());
        }
    }
}
