//! Vesting schedule chart models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar month of the aggregated vesting schedule.
///
/// The calculator generates these; the table, the bar chart and the JSON
/// export just render them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Month label, e.g. "Mar 2027"
    pub month: String,

    /// First day of the month this point describes
    pub date: NaiveDate,

    /// Aggregate cost to exercise all shares vested by this month
    pub exercise_cost: f64,

    /// Aggregate tax liability on the paper profit
    pub taxes: f64,

    /// Aggregate post-tax profit
    pub profit: f64,

    /// Aggregate vested shares / granted shares, 0-100
    pub vested_percentage: f64,
}

/// The donut view for a single selected month. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestingBreakdown {
    pub vested: f64,
    pub unvested: f64,
}

impl VestingBreakdown {
    pub fn from_vested(vested: f64) -> Self {
        VestingBreakdown {
            vested,
            unvested: 100.0 - vested,
        }
    }
}
