use chrono::Datelike;
use tracing::info;

use crate::services::{chart_service, schedule_service};
use crate::utils::dates::month_label;
use crate::AppState;

pub fn execute(state: &AppState, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        return Err("❌ Usage: chart <path.png> | chart donut <path.png>".to_string());
    }
    if state.chart_data.is_empty() {
        return Err("❌ No schedule yet. Run `calc` first.".to_string());
    }

    if args[0].to_lowercase() == "donut" {
        return execute_donut(state, &args[1..]);
    }

    let path = args[0];
    info!("Rendering schedule chart to {}", path);
    chart_service::render_schedule_chart(&state.chart_data, path, 1024, 768)
        .map_err(|e| format!("❌ {}", e))?;
    println!("✅ Schedule chart written to {}", path);
    Ok(())
}

/// Render the donut for the currently selected month.
fn execute_donut(state: &AppState, args: &[&str]) -> Result<(), String> {
    let path = args.first().ok_or("❌ Usage: chart donut <path.png>")?;
    let breakdown = schedule_service::breakdown_at(
        &state.chart_data,
        state.selected_month.year(),
        state.selected_month.month(),
    );

    info!("Rendering donut chart to {}", path);
    chart_service::render_donut_chart(
        breakdown,
        &month_label(state.selected_month),
        path,
        800,
        600,
    )
    .map_err(|e| format!("❌ {}", e))?;
    println!("✅ Donut chart written to {}", path);
    Ok(())
}
