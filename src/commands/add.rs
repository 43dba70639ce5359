use chrono::Utc;
use tracing::info;

use crate::services::grant_service::{
    self, DEFAULT_NUMBER_OF_OPTIONS, DEFAULT_TERM_YEARS, DEFAULT_VESTING_INTERVAL_MONTHS,
};
use crate::AppState;

pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        println!(
            "Usage: add <cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]"
        );
        println!(
            "Omitted fields default to: start today, {} year term, {} options, {} month interval",
            DEFAULT_TERM_YEARS, DEFAULT_NUMBER_OF_OPTIONS, DEFAULT_VESTING_INTERVAL_MONTHS
        );
        return Ok(());
    }

    let today = Utc::now().date_naive();
    let draft = grant_service::parse_grant_fields(args, today)?;
    let grant = state.grants.add(draft);
    info!("Grant #{} added", grant.id);
    println!("✅ Added grant #{}: {}", grant.id, grant.summary());
    Ok(())
}
