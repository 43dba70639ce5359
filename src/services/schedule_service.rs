//! Vesting schedule calculator
//!
//! Pure functions over the grant list and the two global parameters (tax
//! percentage, estimated price per share). The schedule is recomputed
//! wholesale on every invocation; nothing here mutates shared state.

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::models::{ChartDataPoint, Grant, VestingBreakdown};
use crate::utils::dates::{add_months, month_label, month_start, months_between};

/// Enabling the cliff always means 12 months of zero vesting.
const CLIFF_MONTHS: i64 = 12;

/// Fraction vested at the exact cliff month, regardless of interval size.
const CLIFF_VESTED_FRACTION: f64 = 0.25;

/// Compute the month-by-month aggregate schedule.
///
/// Returns one point per calendar month from the month of `now` through
/// `12 × max(term_years)` months. `None` when the grant list is empty, so
/// the caller can keep any previously computed schedule untouched.
pub fn calculate(
    grants: &[Grant],
    tax_percentage: f64,
    price_per_share: f64,
    now: NaiveDate,
) -> Option<Vec<ChartDataPoint>> {
    let max_term = grants.iter().map(|grant| grant.term_years).max()?;
    let horizon = max_term * 12;
    let anchor = month_start(now);

    let mut points = Vec::with_capacity(horizon as usize);
    for offset in 0..horizon {
        let month = add_months(anchor, offset);

        let mut total_exercise_cost = 0.0;
        let mut total_taxes = 0.0;
        let mut total_profit = 0.0;
        let mut total_vested_shares = 0.0;
        let mut total_options: u64 = 0;

        for grant in grants {
            // Unvested options still count toward the denominator
            total_options += u64::from(grant.number_of_options);

            let months_since_start = months_between(month, grant.vesting_start_date);
            let fraction = vested_fraction(grant, months_since_start);

            let vested_shares = f64::from(grant.number_of_options) * fraction;
            let exercise_cost = vested_shares * grant.exercise_price;
            let market_value = vested_shares * price_per_share;
            let raw_profit = market_value - exercise_cost;
            let taxes = raw_profit * (tax_percentage / 100.0);

            total_exercise_cost += exercise_cost;
            total_taxes += taxes;
            total_profit += raw_profit - taxes;
            total_vested_shares += vested_shares;
        }

        points.push(ChartDataPoint {
            month: month_label(month),
            date: month,
            exercise_cost: total_exercise_cost,
            taxes: total_taxes,
            profit: total_profit,
            vested_percentage: 100.0 * total_vested_shares / total_options as f64,
        });
    }

    info!(
        "Calculated {} schedule points across {} grant(s)",
        points.len(),
        grants.len()
    );
    Some(points)
}

/// Fraction (0-1) of a single grant vested `months_since_start` whole
/// months after its vesting start month. Negative values mean the start is
/// still in the future.
pub fn vested_fraction(grant: &Grant, months_since_start: i64) -> f64 {
    let cliff = if grant.has_cliff { CLIFF_MONTHS } else { 0 };
    if months_since_start < cliff {
        return 0.0;
    }
    // Flat 25% exactly at the cliff boundary, independent of the interval
    if grant.has_cliff && months_since_start == cliff {
        return CLIFF_VESTED_FRACTION;
    }
    let interval = i64::from(grant.vesting_interval_months);
    let periods = (months_since_start - cliff) / interval;
    let vested_months = periods * interval + cliff;
    (vested_months as f64 / f64::from(grant.term_years * 12)).min(1.0)
}

/// Vested percentage of the point matching `year`/`month`, or 0 when no
/// point matches (e.g. before any calculation has run).
pub fn vested_percentage_at(points: &[ChartDataPoint], year: i32, month: u32) -> f64 {
    points
        .iter()
        .find(|point| point.date.year() == year && point.date.month() == month)
        .map(|point| point.vested_percentage)
        .unwrap_or(0.0)
}

/// Donut view for `year`/`month`: vested and unvested slices summing to 100.
pub fn breakdown_at(points: &[ChartDataPoint], year: i32, month: u32) -> VestingBreakdown {
    VestingBreakdown::from_vested(vested_percentage_at(points, year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grant;
    use chrono::NaiveDate;

    const NOW: &str = "2026-08-07";

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
    }

    fn grant(has_cliff: bool, start: &str) -> Grant {
        Grant {
            id: 1,
            has_cliff,
            exercise_price: 1.0,
            vesting_start_date: date(start),
            term_years: 4,
            number_of_options: 1000,
            vesting_interval_months: 3,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_no_cliff_starts_at_zero_and_staircases() {
        let g = grant(false, NOW);
        assert_close(vested_fraction(&g, 0), 0.0);
        assert_close(vested_fraction(&g, 1), 0.0);
        assert_close(vested_fraction(&g, 2), 0.0);
        // Steps of interval / (term * 12) every interval months
        assert_close(vested_fraction(&g, 3), 3.0 / 48.0);
        assert_close(vested_fraction(&g, 4), 3.0 / 48.0);
        assert_close(vested_fraction(&g, 6), 6.0 / 48.0);
    }

    #[test]
    fn test_vested_fraction_is_non_decreasing_and_capped() {
        let g = grant(false, NOW);
        let mut previous = 0.0;
        for months in 0..200 {
            let fraction = vested_fraction(&g, months);
            assert!(fraction >= previous, "decreased at month {}", months);
            assert!(fraction <= 1.0);
            previous = fraction;
        }
        assert_close(vested_fraction(&g, 48), 1.0);
        // Stays at 100% once reached
        assert_close(vested_fraction(&g, 120), 1.0);
    }

    #[test]
    fn test_cliff_grant_matches_worked_example() {
        // term 4, interval 3, cliff: 0 before month 12, exactly 25% at 12,
        // then min((periods*3 + 12)/48, 1) afterward
        let g = grant(true, NOW);
        assert_close(vested_fraction(&g, 11), 0.0);
        assert_close(vested_fraction(&g, 12), 0.25);
        assert_close(vested_fraction(&g, 13), 12.0 / 48.0);
        assert_close(vested_fraction(&g, 15), 15.0 / 48.0); // 0.3125
        assert_close(vested_fraction(&g, 48), 1.0);
    }

    #[test]
    fn test_future_start_is_not_vested() {
        let g = grant(true, NOW);
        assert_close(vested_fraction(&g, -5), 0.0);
    }

    #[test]
    fn test_schedule_spans_twelve_months_per_term_year() {
        let points = calculate(&[grant(true, NOW)], 25.0, 5.0, date(NOW)).expect("non-empty");
        assert_eq!(points.len(), 48);
        assert_eq!(points[0].date, date("2026-08-01"));
        assert_eq!(points[0].month, "Aug 2026");
        assert_eq!(points[47].date, date("2030-07-01"));
    }

    #[test]
    fn test_schedule_aggregates_money_at_cliff_month() {
        // 1000 options at $1 strike, $5 estimate, 25% tax: at the cliff
        // month 250 shares are vested -> cost 250, raw profit 1000,
        // taxes 250, net profit 750
        let points = calculate(&[grant(true, NOW)], 25.0, 5.0, date(NOW)).expect("non-empty");
        let at_cliff = &points[12];
        assert_close(at_cliff.vested_percentage, 25.0);
        assert_close(at_cliff.exercise_cost, 250.0);
        assert_close(at_cliff.taxes, 250.0);
        assert_close(at_cliff.profit, 750.0);
    }

    #[test]
    fn test_aggregate_percentage_is_scale_invariant() {
        let single = calculate(&[grant(true, NOW)], 25.0, 5.0, date(NOW)).expect("non-empty");
        let triple = calculate(
            &[grant(true, NOW), grant(true, NOW), grant(true, NOW)],
            25.0,
            5.0,
            date(NOW),
        )
        .expect("non-empty");

        for (s, t) in single.iter().zip(triple.iter()) {
            assert_close(s.vested_percentage, t.vested_percentage);
            assert_close(t.exercise_cost, 3.0 * s.exercise_cost);
        }
    }

    #[test]
    fn test_fully_vested_plus_unvested_grant_averages_to_fifty() {
        // One grant finished vesting years ago, one starts next year; both
        // 1000 options, so month 0 sits at exactly 50% vested
        let vested = grant(false, "2020-01-01");
        let future = grant(false, "2027-08-01");
        let points =
            calculate(&[vested, future], 25.0, 5.0, date(NOW)).expect("non-empty");
        assert_close(points[0].vested_percentage, 50.0);
    }

    #[test]
    fn test_future_grant_counts_toward_denominator_only() {
        let points =
            calculate(&[grant(false, "2030-01-01")], 25.0, 5.0, date(NOW)).expect("non-empty");
        let first = &points[0];
        assert_close(first.vested_percentage, 0.0);
        assert_close(first.exercise_cost, 0.0);
        assert_close(first.taxes, 0.0);
        assert_close(first.profit, 0.0);
    }

    #[test]
    fn test_empty_grant_list_is_a_no_op() {
        assert!(calculate(&[], 25.0, 5.0, date(NOW)).is_none());
    }

    #[test]
    fn test_point_lookup_by_year_and_month() {
        let points = calculate(&[grant(true, NOW)], 25.0, 5.0, date(NOW)).expect("non-empty");
        assert_close(vested_percentage_at(&points, 2027, 8), 25.0);
        // No match -> 0, and the donut still sums to 100
        assert_close(vested_percentage_at(&points, 1999, 1), 0.0);
        let breakdown = breakdown_at(&points, 1999, 1);
        assert_close(breakdown.vested + breakdown.unvested, 100.0);
        assert_close(breakdown.unvested, 100.0);
    }

    #[test]
    fn test_negative_paper_profit_taxes_follow_sign() {
        // Strike above the estimated price: raw profit is negative and the
        // tax amount carries the same sign as the paper profit
        let mut g = grant(false, "2020-01-01");
        g.exercise_price = 10.0;
        let points = calculate(&[g], 25.0, 5.0, date(NOW)).expect("non-empty");
        let first = &points[0];
        assert_close(first.exercise_cost, 10_000.0);
        assert_close(first.taxes, -1250.0);
        assert_close(first.profit, -3750.0);
    }
}
