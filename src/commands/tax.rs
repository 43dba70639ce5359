use tracing::info;

use crate::AppState;

/// Show or set the tax percentage applied to paper profit.
pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let raw = match args.first() {
        Some(raw) => raw,
        None => {
            println!("💰 Tax percentage: {}%", state.tax_percentage);
            return Ok(());
        }
    };

    let percentage: f64 = raw
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("❌ Invalid tax percentage: '{}'", raw))?;

    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err("❌ Tax percentage must be between 0 and 100".to_string());
    }

    state.tax_percentage = percentage;
    info!("Tax percentage set to {}%", percentage);
    println!("✅ Tax percentage set to {}%", percentage);
    Ok(())
}
