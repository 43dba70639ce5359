use tracing::info;

use crate::AppState;

pub fn execute(state: &mut AppState, args: &[&str]) -> Result<(), String> {
    let raw = args.first().ok_or("❌ Usage: remove <id>")?;
    let id: u64 = raw
        .parse()
        .map_err(|_| format!("❌ Invalid grant id: '{}'", raw))?;

    // Removing an absent id is fine, the store just stays as it is
    if state.grants.remove(id) {
        info!("Grant #{} removed", id);
        println!("✅ Removed grant #{}", id);
    } else {
        println!("ℹ️ No grant with id {}; nothing removed", id);
    }
    Ok(())
}
