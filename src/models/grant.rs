//! Option grant models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single stock-option grant held in the grant book.
///
/// `id` is assigned by the book from a monotonic counter and is unique for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub id: u64,
    pub has_cliff: bool,
    pub exercise_price: f64,
    pub vesting_start_date: NaiveDate,
    pub term_years: u32,
    pub number_of_options: u32,
    pub vesting_interval_months: u32,
}

/// Grant fields without an id, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantDraft {
    pub has_cliff: bool,
    pub exercise_price: f64,
    pub vesting_start_date: NaiveDate,
    pub term_years: u32,
    pub number_of_options: u32,
    pub vesting_interval_months: u32,
}

impl Grant {
    /// One-line human summary, used by the `list` command.
    pub fn summary(&self) -> String {
        format!(
            "{} - ${:.2} - {} - {} years - {} options - {} mo interval",
            if self.has_cliff { "With Cliff" } else { "No Cliff" },
            self.exercise_price,
            self.vesting_start_date,
            self.term_years,
            self.number_of_options,
            self.vesting_interval_months,
        )
    }
}
