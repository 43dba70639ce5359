use chrono::Utc;
use tracing::info;

use crate::services::grant_service;
use crate::AppState;

pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    if args.len() < 3 {
        return Err(
            "❌ Usage: edit <id> <cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]"
                .to_string(),
        );
    }

    let id: u64 = args[0]
        .parse()
        .map_err(|_| format!("❌ Invalid grant id: '{}'", args[0]))?;

    let today = Utc::now().date_naive();
    let draft = grant_service::parse_grant_fields(&args[1..], today)?;

    if !state.grants.edit(id, draft) {
        return Err(format!("❌ No grant with id {}", id));
    }

    info!("Grant #{} updated", id);
    if let Some(grant) = state.grants.get(id) {
        println!("✅ Updated grant #{}: {}", id, grant.summary());
    }
    Ok(())
}
