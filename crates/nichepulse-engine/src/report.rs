//! Markdown demand report for one niche's score history.

use chrono::{DateTime, Utc};
use nichepulse_core::{Trend, WeeklyScore};

use crate::trend::classify_trend;

/// Render a markdown report of weekly scores, oldest week first.
///
/// The trend column is recomputed from consecutive demand scores with
/// [`classify_trend`] rather than read from the stored metrics, so the
/// report always agrees with the classifier even for back-filled weeks.
#[must_use]
pub fn render_demand_report(
    niche: &str,
    history: &[WeeklyScore],
    generated_at: DateTime<Utc>,
) -> String {
    let mut weeks: Vec<&WeeklyScore> = history.iter().collect();
    weeks.sort_by_key(|w| w.week_of);

    let mut out = format!("# Demand Report: {niche}\n\n");
    out.push_str(&format!(
        "**Generated**: {}\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("**Weeks**: {}\n\n", weeks.len()));

    if weeks.is_empty() {
        out.push_str("No weekly scores recorded yet.\n");
        return out;
    }

    out.push_str("---\n\n");
    out.push_str("| Week | Demand | Opportunity | Message Fit | Trend | Change |\n");
    out.push_str("|------|--------|-------------|-------------|-------|--------|\n");

    let mut previous: Option<f64> = None;
    let mut latest = (Trend::Stable, 0.0);
    for week in &weeks {
        let m = &week.metrics;
        latest = classify_trend(m.demand_score, previous);
        out.push_str(&format!(
            "| {} | {:.1} | {:.1} | {:.1} | {} | {} |\n",
            week.week_of.format("%Y-%m-%d"),
            m.demand_score,
            m.opportunity_score,
            m.message_market_fit,
            trend_label(latest.0),
            fmt_change(previous.map(|_| latest.1)),
        ));
        previous = Some(m.demand_score);
    }

    if let Some(last) = weeks.last() {
        out.push_str(&format!(
            "\n**Latest**: {:.1} ({})\n",
            last.metrics.demand_score,
            trend_label(latest.0)
        ));
    }

    out
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲ up",
        Trend::Down => "▼ down",
        Trend::Stable => "■ stable",
    }
}

/// Signed one-decimal change, or an em dash for the first week.
fn fmt_change(delta: Option<f64>) -> String {
    delta.map_or_else(|| "\u{2014}".to_string(), |d| format!("{d:+.1}"))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use nichepulse_core::DemandMetrics;

    use super::*;

    fn week(y: i32, m: u32, d: u32, demand_score: f64) -> WeeklyScore {
        WeeklyScore {
            week_of: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            metrics: DemandMetrics {
                demand_score,
                opportunity_score: 50.0,
                message_market_fit: 12.5,
                trend: Trend::Stable,
                trend_delta: 0.0,
            },
        }
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, 8, 30, 0).unwrap()
    }

    #[test]
    fn empty_history_says_so() {
        let report = render_demand_report("invoicing", &[], generated());
        assert!(report.starts_with("# Demand Report: invoicing"));
        assert!(report.contains("**Weeks**: 0"));
        assert!(report.contains("No weekly scores recorded yet."));
        assert!(!report.contains("| Week |"));
    }

    #[test]
    fn rows_are_sorted_and_classified() {
        let history = [
            week(2026, 3, 2, 47.0),
            week(2026, 2, 16, 40.0),
            week(2026, 2, 23, 44.0),
        ];
        let report = render_demand_report("invoicing", &history, generated());
        let rows: Vec<&str> = report
            .lines()
            .filter(|l| l.starts_with("| 2026"))
            .collect();
        assert_eq!(
            rows,
            [
                "| 2026-02-16 | 40.0 | 50.0 | 12.5 | ■ stable | \u{2014} |",
                "| 2026-02-23 | 44.0 | 50.0 | 12.5 | ■ stable | +4.0 |",
                "| 2026-03-02 | 47.0 | 50.0 | 12.5 | ■ stable | +3.0 |",
            ]
        );
    }

    #[test]
    fn large_moves_are_flagged() {
        let history = [week(2026, 2, 2, 60.0), week(2026, 2, 9, 52.0), week(2026, 2, 16, 70.0)];
        let report = render_demand_report("crm", &history, generated());
        assert!(report.contains("| 2026-02-09 | 52.0 | 50.0 | 12.5 | ▼ down | -8.0 |"));
        assert!(report.contains("| 2026-02-16 | 70.0 | 50.0 | 12.5 | ▲ up | +18.0 |"));
        assert!(report.contains("**Latest**: 70.0 (▲ up)"));
    }

    #[test]
    fn single_week_renders_full_document() {
        let report = render_demand_report("crm", &[week(2026, 1, 5, 10.0)], generated());
        let expected = "# Demand Report: crm\n\
                        \n\
                        **Generated**: 2026-03-09 08:30 UTC\n\
                        **Weeks**: 1\n\
                        \n\
                        ---\n\
                        \n\
                        | Week | Demand | Opportunity | Message Fit | Trend | Change |\n\
                        |------|--------|-------------|-------------|-------|--------|\n\
                        | 2026-01-05 | 10.0 | 50.0 | 12.5 | ■ stable | \u{2014} |\n\
                        \n\
                        **Latest**: 10.0 (■ stable)\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn header_includes_generation_time() {
        let report = render_demand_report("crm", &[week(2026, 1, 5, 10.0)], generated());
        assert!(report.contains("**Generated**: 2026-03-09 08:30 UTC"));
    }
}
