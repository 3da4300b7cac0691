//! Composite demand, opportunity, and message-market fit scoring.
//!
//! Each signal family is first normalized onto `[0, 100]` against the
//! saturation caps in [`ScoringConfig`], then blended with fixed integer
//! weights. Competitive heat enters inverted: fewer competitors means more
//! white space and a higher score.

use std::collections::BTreeSet;

use nichepulse_core::{ConfigError, DemandMetrics, ScoringConfig, WeeklySignals};

use crate::matcher::{LexicalMatcher, SignalMatcher};
use crate::trend::classify_trend;

// ---------------------------------------------------------------------------
// Weight constants (percent, must sum to exactly 100)
// ---------------------------------------------------------------------------

/// Ad activity: advertiser breadth and ad longevity.
pub const W_ADS: u32 = 30;
/// Buyer-intent search demand.
pub const W_SEARCH: u32 = 20;
/// Week-over-week mention growth.
pub const W_VELOCITY: u32 = 20;
/// Complaint/desire frequency and purchase triggers.
pub const W_PAIN: u32 = 20;
/// Inverted competitive heat.
pub const W_WHITE_SPACE: u32 = 10;

const _: () = assert!(
    W_ADS + W_SEARCH + W_VELOCITY + W_PAIN + W_WHITE_SPACE == 100,
    "demand weights must sum to exactly 100"
);

/// Share of the opportunity score taken from the demand score.
pub const W_OPP_DEMAND: u32 = 60;
/// Share of the opportunity score taken from white space.
pub const W_OPP_WHITE_SPACE: u32 = 40;

const _: () = assert!(
    W_OPP_DEMAND + W_OPP_WHITE_SPACE == 100,
    "opportunity weights must sum to exactly 100"
);

// Sub-weights inside individual components. Each group sums to 100.
const ADS_BREADTH: u32 = 60;
const ADS_LONGEVITY: u32 = 40;
const SEARCH_BREADTH: u32 = 40;
const SEARCH_VOLUME: u32 = 40;
const SEARCH_SHARE: u32 = 20;
const PAIN_FREQUENCY: u32 = 70;
const PAIN_TRIGGERS: u32 = 30;

const _: () = assert!(ADS_BREADTH + ADS_LONGEVITY == 100);
const _: () = assert!(SEARCH_BREADTH + SEARCH_VOLUME + SEARCH_SHARE == 100);
const _: () = assert!(PAIN_FREQUENCY + PAIN_TRIGGERS == 100);

/// Normalized component values, each in `[0, 100]`, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub ads: f64,
    pub search: f64,
    pub velocity: f64,
    pub pain: f64,
    /// `100 - competitive heat`.
    pub white_space: f64,
}

/// Demand scorer with configurable caps and matcher.
#[derive(Debug, Clone)]
pub struct DemandScorer<M = LexicalMatcher> {
    config: ScoringConfig,
    matcher: M,
}

impl Default for DemandScorer<LexicalMatcher> {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            matcher: LexicalMatcher,
        }
    }
}

impl<M: SignalMatcher> DemandScorer<M> {
    /// Build a scorer from validated caps and a matching strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any cap is not a positive finite number.
    pub fn new(config: ScoringConfig, matcher: M) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, matcher })
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one week of signals. Never fails; missing or malformed signals
    /// contribute zero.
    #[must_use]
    pub fn score(&self, signals: &WeeklySignals) -> DemandMetrics {
        let components = self.components(signals);

        let demand_score = bounded(
            weighted(components.ads, W_ADS)
                + weighted(components.search, W_SEARCH)
                + weighted(components.velocity, W_VELOCITY)
                + weighted(components.pain, W_PAIN)
                + weighted(components.white_space, W_WHITE_SPACE),
        );

        let opportunity_score = bounded(
            weighted(demand_score, W_OPP_DEMAND)
                + weighted(components.white_space, W_OPP_WHITE_SPACE),
        );

        let message_market_fit = bounded(self.message_market_fit(signals));

        let (trend, trend_delta) = classify_trend(demand_score, signals.previous_score);

        tracing::debug!(
            ads = components.ads,
            search = components.search,
            velocity = components.velocity,
            pain = components.pain,
            white_space = components.white_space,
            demand_score,
            opportunity_score,
            message_market_fit,
            %trend,
            "scored weekly signals"
        );

        DemandMetrics {
            demand_score,
            opportunity_score,
            message_market_fit,
            trend,
            trend_delta,
        }
    }

    /// Normalized per-component values for `signals`.
    #[must_use]
    pub fn components(&self, signals: &WeeklySignals) -> ComponentScores {
        ComponentScores {
            ads: self.ad_activity(signals),
            search: self.buyer_intent(signals),
            velocity: velocity(signals),
            pain: self.pain_intensity(signals),
            white_space: 100.0 - self.competitive_heat(signals),
        }
    }

    fn ad_activity(&self, signals: &WeeklySignals) -> f64 {
        let ads = &signals.ads;
        weighted(
            saturate(count(ads.advertiser_count), self.config.advertiser_cap),
            ADS_BREADTH,
        ) + weighted(
            saturate(ads.avg_longevity_days, self.config.longevity_cap_days),
            ADS_LONGEVITY,
        )
    }

    fn buyer_intent(&self, signals: &WeeklySignals) -> f64 {
        let search = &signals.search;

        let mut keyword_count = 0_i64;
        let mut intent_volume = 0.0_f64;
        for kw in &search.buyer_intent_keywords {
            if kw.keyword.trim().is_empty() {
                continue;
            }
            keyword_count += 1;
            let relevance = unit(self.matcher.intent_relevance(&kw.keyword));
            intent_volume += relevance * count(kw.volume);
        }

        let total_volume = count(search.total_volume);
        let share = if total_volume > 0.0 {
            unit(intent_volume / total_volume) * 100.0
        } else {
            0.0
        };

        weighted(
            saturate(count(keyword_count), self.config.keyword_count_cap),
            SEARCH_BREADTH,
        ) + weighted(
            saturate(intent_volume, self.config.intent_volume_cap),
            SEARCH_VOLUME,
        ) + weighted(share, SEARCH_SHARE)
    }

    fn pain_intensity(&self, signals: &WeeklySignals) -> f64 {
        let forums = &signals.forums;
        let frequency: f64 = forums
            .complaints
            .iter()
            .chain(&forums.desires)
            .map(|item| count(item.frequency))
            .sum();

        weighted(
            saturate(frequency, self.config.pain_frequency_cap),
            PAIN_FREQUENCY,
        ) + weighted(
            saturate(count(forums.purchase_triggers), self.config.purchase_trigger_cap),
            PAIN_TRIGGERS,
        )
    }

    /// Competitor count mapped onto `[0, 100)` as `100 * n / (n + k)`.
    ///
    /// Strictly increasing in `n` with a shrinking marginal penalty; zero
    /// competitors give zero heat.
    fn competitive_heat(&self, signals: &WeeklySignals) -> f64 {
        let n = count(signals.competitors.active_competitors);
        let k = self.config.competitor_half_saturation;
        100.0 * n / (n + k)
    }

    /// Jaccard overlap, scaled to 100, between ad messaging terms and forum
    /// pain/desire terms.
    fn message_market_fit(&self, signals: &WeeklySignals) -> f64 {
        let ad_terms: BTreeSet<String> = signals
            .ads
            .top_angles
            .iter()
            .chain(&signals.ads.top_offers)
            .flat_map(|text| self.matcher.terms(text))
            .collect();

        let forum_terms: BTreeSet<String> = signals
            .forums
            .complaints
            .iter()
            .chain(&signals.forums.desires)
            .flat_map(|item| self.matcher.terms(&item.text))
            .collect();

        if ad_terms.is_empty() || forum_terms.is_empty() {
            return 0.0;
        }

        let shared = ad_terms.intersection(&forum_terms).count();
        let union = ad_terms.union(&forum_terms).count();

        #[allow(clippy::cast_precision_loss)]
        let fit = shared as f64 / union as f64 * 100.0;
        fit
    }
}

/// Score one week of signals with the default caps and [`LexicalMatcher`].
#[must_use]
pub fn calculate_demand_score(signals: &WeeklySignals) -> DemandMetrics {
    DemandScorer::default().score(signals)
}

/// Mention growth `(current - previous) / max(previous, 1)`, clamped to `[0, 1]`
/// and scaled to 100.
fn velocity(signals: &WeeklySignals) -> f64 {
    let current = count(signals.mentions.current_week_count);
    let previous = count(signals.mentions.previous_week_count);
    let growth = (current - previous) / previous.max(1.0);
    unit(growth) * 100.0
}

/// Apply an integer percent weight. Multiplying before dividing keeps
/// round-number inputs exact (`100 * 10 / 100 == 10.0`).
fn weighted(value: f64, weight: u32) -> f64 {
    value * f64::from(weight) / 100.0
}

/// Negative counts are treated as zero.
fn count(n: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = n.max(0) as f64;
    n
}

/// Min-clamped linear saturation onto `[0, 100]`. NaN counts as zero.
fn saturate(value: f64, cap: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, cap) / cap * 100.0
}

/// Clamp to `[0, 1]`, mapping NaN to zero.
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Final clamp to `[0, 100]`, mapping NaN to zero.
fn bounded(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
