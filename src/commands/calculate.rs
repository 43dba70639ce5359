use chrono::Utc;
use tracing::info;

use crate::services::schedule_service;
use crate::utils::dates::month_start;
use crate::utils::money::{format_money, format_percent};
use crate::utils::table::{Align, Table};
use crate::AppState;

/// Run the schedule calculator against "now" and print the result.
///
/// An empty grant book is a no-op: whatever was calculated before stays in
/// place, so charts and selections keep working.
pub fn execute(state: &mut AppState, _args: &[&str]) -> Result<(), String> {
    if state.grants.is_empty() {
        println!("ℹ️ No grants to calculate; the existing schedule is unchanged.");
        return Ok(());
    }

    let now = Utc::now().date_naive();
    let points = match schedule_service::calculate(
        state.grants.grants(),
        state.tax_percentage,
        state.price_per_share,
        now,
    ) {
        Some(points) => points,
        None => {
            println!("ℹ️ No grants to calculate; the existing schedule is unchanged.");
            return Ok(());
        }
    };

    info!(
        "Schedule recalculated: {} months from {}",
        points.len(),
        month_start(now)
    );

    let mut table = Table::new(vec![
        ("Month", Align::Left),
        ("Vested", Align::Right),
        ("Exercise Cost", Align::Right),
        ("Taxes", Align::Right),
        ("Profit", Align::Right),
    ]);
    for point in &points {
        table.add_row(vec![
            point.month.clone(),
            format_percent(point.vested_percentage),
            format_money(point.exercise_cost),
            format_money(point.taxes),
            format_money(point.profit),
        ]);
    }
    print!("{}", table.render());

    // The donut view resets to the invocation month on every recalculation
    state.chart_data = points;
    state.selected_month = month_start(now);

    println!(
        "✅ Calculated {} months. Use `select <YYYY-MM>` to inspect one, `chart <path.png>` to render.",
        state.chart_data.len()
    );
    Ok(())
}
