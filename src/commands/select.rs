use crate::commands::status;
use crate::utils::dates::parse_year_month;
use crate::AppState;

/// Pick the month the donut view describes.
pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let raw = args.first().ok_or("❌ Usage: select <YYYY-MM>")?;
    state.selected_month = parse_year_month(raw)?;
    status::print_breakdown(state);
    Ok(())
}
