use tracing::info;

use crate::utils::money::format_money;
use crate::AppState;

/// Show or set the estimated price per share used for profit estimates.
pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let raw = match args.first() {
        Some(raw) => raw,
        None => {
            println!(
                "💹 Estimated price per share: {}",
                format_money(state.price_per_share)
            );
            return Ok(());
        }
    };

    let price: f64 = raw
        .trim_start_matches('$')
        .parse()
        .map_err(|_| format!("❌ Invalid price: '{}'", raw))?;

    if !price.is_finite() || price < 0.0 {
        return Err("❌ Price per share must be a non-negative amount".to_string());
    }

    state.price_per_share = price;
    info!("Estimated price per share set to {}", price);
    println!("✅ Estimated price per share set to {}", format_money(price));
    Ok(())
}
