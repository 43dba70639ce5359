use crate::utils::money::format_money;
use crate::utils::table::{Align, Table};
use crate::AppState;

pub fn execute(state: &AppState, _args: &[&str]) -> Result<(), String> {
    if state.grants.is_empty() {
        println!("ℹ️ No grants added yet. Use `add` to enter one.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        ("Id", Align::Right),
        ("Cliff", Align::Left),
        ("Strike", Align::Right),
        ("Start", Align::Left),
        ("Term", Align::Right),
        ("Options", Align::Right),
        ("Interval", Align::Right),
    ]);

    for grant in state.grants.grants() {
        table.add_row(vec![
            grant.id.to_string(),
            if grant.has_cliff { "yes" } else { "no" }.to_string(),
            format_money(grant.exercise_price),
            grant.vesting_start_date.to_string(),
            format!("{} yr", grant.term_years),
            grant.number_of_options.to_string(),
            format!("{} mo", grant.vesting_interval_months),
        ]);
    }

    print!("{}", table.render());
    println!(
        "{} grant(s) | tax {}% | estimated share price {}",
        state.grants.len(),
        state.tax_percentage,
        format_money(state.price_per_share),
    );
    Ok(())
}
