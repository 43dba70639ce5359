//! Grant book: the ordered, in-memory collection of option grants

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Grant, GrantDraft};

/// Default grant fields offered when the user omits trailing arguments.
pub const DEFAULT_TERM_YEARS: u32 = 4;
pub const DEFAULT_NUMBER_OF_OPTIONS: u32 = 1000;
pub const DEFAULT_VESTING_INTERVAL_MONTHS: u32 = 3;

/// Terms beyond this are treated as input mistakes rather than schedules.
const MAX_TERM_YEARS: u32 = 100;

/// Ordered grant collection with a monotonic id counter.
///
/// Ids are never reused within a session, so a removed grant's id stays
/// dangling rather than silently pointing at a newer entry.
pub struct GrantBook {
    grants: Vec<Grant>,
    next_id: u64,
}

impl GrantBook {
    pub fn new() -> Self {
        GrantBook {
            grants: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign a fresh id to `draft` and append it. Returns the new entry.
    pub fn add(&mut self, draft: GrantDraft) -> Grant {
        let id = self.next_id;
        self.next_id += 1;
        let grant = Grant {
            id,
            has_cliff: draft.has_cliff,
            exercise_price: draft.exercise_price,
            vesting_start_date: draft.vesting_start_date,
            term_years: draft.term_years,
            number_of_options: draft.number_of_options,
            vesting_interval_months: draft.vesting_interval_months,
        };
        self.grants.push(grant.clone());
        debug!("Added grant #{}", id);
        grant
    }

    /// Drop the grant with `id`. Absent ids are not an error.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.grants.len();
        self.grants.retain(|grant| grant.id != id);
        before != self.grants.len()
    }

    /// Replace the fields of the grant with `id` in place, preserving list
    /// order and the id itself. Returns false when no grant matches.
    pub fn edit(&mut self, id: u64, draft: GrantDraft) -> bool {
        match self.grants.iter_mut().find(|grant| grant.id == id) {
            Some(grant) => {
                grant.has_cliff = draft.has_cliff;
                grant.exercise_price = draft.exercise_price;
                grant.vesting_start_date = draft.vesting_start_date;
                grant.term_years = draft.term_years;
                grant.number_of_options = draft.number_of_options;
                grant.vesting_interval_months = draft.vesting_interval_months;
                debug!("Edited grant #{}", id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Grant> {
        self.grants.iter().find(|grant| grant.id == id)
    }

    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

impl Default for GrantBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the grant fields of `add`/`edit`:
/// `<cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]`
///
/// Omitted trailing fields fall back to the defaults above with the start
/// date defaulting to `today`.
pub fn parse_grant_fields(args: &[&str], today: NaiveDate) -> Result<GrantDraft, String> {
    if args.len() < 2 {
        return Err(
            "❌ Usage: <cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]"
                .to_string(),
        );
    }

    let has_cliff = match args[0].to_lowercase().as_str() {
        "cliff" => true,
        "nocliff" | "no-cliff" => false,
        other => {
            return Err(format!(
                "❌ Expected 'cliff' or 'nocliff', got '{}'",
                other
            ))
        }
    };

    let exercise_price: f64 = args[1]
        .trim_start_matches('$')
        .parse()
        .map_err(|_| format!("❌ Invalid exercise price: '{}'", args[1]))?;

    let vesting_start_date = match args.get(2) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| format!("❌ Invalid start date: '{}'. Use YYYY-MM-DD", raw))?,
        None => today,
    };

    let term_years = parse_count(args.get(3), "term", DEFAULT_TERM_YEARS)?;
    let number_of_options = parse_count(args.get(4), "number of options", DEFAULT_NUMBER_OF_OPTIONS)?;
    let vesting_interval_months =
        parse_count(args.get(5), "vesting interval", DEFAULT_VESTING_INTERVAL_MONTHS)?;

    let draft = GrantDraft {
        has_cliff,
        exercise_price,
        vesting_start_date,
        term_years,
        number_of_options,
        vesting_interval_months,
    };
    validate_draft(&draft)?;
    Ok(draft)
}

fn parse_count(arg: Option<&&str>, label: &str, default: u32) -> Result<u32, String> {
    match arg {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("❌ Invalid {}: '{}'", label, raw)),
        None => Ok(default),
    }
}

/// Boundary validation. Zero terms or intervals would make the staircase
/// divide by zero, so they are rejected here rather than in the calculator.
pub fn validate_draft(draft: &GrantDraft) -> Result<(), String> {
    if !draft.exercise_price.is_finite() || draft.exercise_price < 0.0 {
        return Err("❌ Exercise price must be a non-negative amount".to_string());
    }
    if draft.term_years == 0 {
        return Err("❌ Term must be at least 1 year".to_string());
    }
    if draft.term_years > MAX_TERM_YEARS {
        return Err(format!("❌ Term must be at most {} years", MAX_TERM_YEARS));
    }
    if draft.number_of_options == 0 {
        return Err("❌ Number of options must be at least 1".to_string());
    }
    if draft.vesting_interval_months == 0 {
        return Err("❌ Vesting interval must be at least 1 month".to_string());
    }
    Ok(())
}
