use chrono::Datelike;

use crate::services::schedule_service;
use crate::utils::dates::month_label;
use crate::utils::money::format_percent;
use crate::AppState;

pub fn execute(state: &AppState, _args: &[&str]) -> Result<(), String> {
    print_breakdown(state);
    Ok(())
}

/// Print the vested/unvested split for the selected month.
///
/// A month with no matching data point (or no calculation yet) reads as
/// 0% vested / 100% unvested rather than an error.
pub fn print_breakdown(state: &AppState) {
    let breakdown = schedule_service::breakdown_at(
        &state.chart_data,
        state.selected_month.year(),
        state.selected_month.month(),
    );
    println!("🍩 Vesting status as of {}", month_label(state.selected_month));
    println!(
        "   {} vested, {} unvested",
        format_percent(breakdown.vested),
        format_percent(breakdown.unvested)
    );
}
