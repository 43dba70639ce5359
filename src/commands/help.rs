use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref HELP_TOPICS: HashMap<&'static str, &'static str> = {
        let mut topics = HashMap::new();
        topics.insert(
            "add",
            "add <cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]\n\
             Add a grant. Omitted fields default to: start today, 4 year term, 1000 options, 3 month interval.\n\
             Example: add cliff 0.50 2026-01-15 4 4800 3",
        );
        topics.insert(
            "edit",
            "edit <id> <cliff|nocliff> <exercise_price> [start YYYY-MM-DD] [term_years] [options] [interval_months]\n\
             Replace all fields of the grant with the given id. The id and list position stay the same.",
        );
        topics.insert("remove", "remove <id>\nDrop the grant with the given id. Unknown ids are ignored.");
        topics.insert("list", "list\nShow all grants plus the current tax and share price parameters.");
        topics.insert(
            "tax",
            "tax [percent]\nShow or set the tax percentage (0-100) applied to paper profit.",
        );
        topics.insert(
            "price",
            "price [usd]\nShow or set the estimated price per share used for profit estimates.",
        );
        topics.insert(
            "calc",
            "calc\nCompute the month-by-month vesting schedule for all grants, starting this month.\n\
             Does nothing when no grants exist; a previous schedule stays in place.",
        );
        topics.insert(
            "select",
            "select <YYYY-MM>\nPick the month the donut view describes. Months outside the schedule read as 0% vested.",
        );
        topics.insert("status", "status\nShow the vested/unvested split for the selected month.");
        topics.insert(
            "chart",
            "chart <path.png>\nRender the schedule as a stacked bar chart.\n\
             chart donut <path.png>\nRender the selected month's vested/unvested split as a donut.",
        );
        topics.insert("export", "export <path.json>\nWrite the current schedule as pretty-printed JSON.");
        topics
    };
}

pub fn execute(args: &[&str]) -> Result<(), String> {
    if let Some(topic) = args.first() {
        match HELP_TOPICS.get(topic.to_lowercase().as_str()) {
            Some(text) => println!("{}", text),
            None => println!("❓ No help for '{}'. Type 'help' for the command list.", topic),
        }
        return Ok(());
    }

    println!("Commands:");
    println!("  add       Add an option grant");
    println!("  edit      Replace a grant's fields by id");
    println!("  remove    Drop a grant by id");
    println!("  list      Show all grants and parameters");
    println!("  tax       Show or set the tax percentage");
    println!("  price     Show or set the estimated price per share");
    println!("  calc      Compute the vesting schedule");
    println!("  select    Pick the month for the donut view");
    println!("  status    Show vested/unvested for the selected month");
    println!("  chart     Render the bar chart or donut as PNG");
    println!("  export    Write the schedule as JSON");
    println!("  quit      Leave");
    println!();
    println!("`help <command>` shows usage and examples.");
    Ok(())
}
