use std::fs;

use tracing::info;

use crate::AppState;

/// Write the current schedule as pretty-printed JSON.
pub fn execute(state: &AppState, args: &[&str]) -> Result<(), String> {
    let path = args.first().ok_or("❌ Usage: export <path.json>")?;
    if state.chart_data.is_empty() {
        return Err("❌ No schedule yet. Run `calc` first.".to_string());
    }

    let json = serde_json::to_string_pretty(&state.chart_data)
        .map_err(|e| format!("❌ Failed to serialize schedule: {}", e))?;
    fs::write(path, json).map_err(|e| format!("❌ Failed to write {}: {}", path, e))?;

    info!("Exported schedule to {}", path);
    println!(
        "✅ Exported {} schedule points to {}",
        state.chart_data.len(),
        path
    );
    Ok(())
}
