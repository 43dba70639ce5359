pub mod add;
pub mod calculate;
pub mod chart;
pub mod edit;
pub mod export;
pub mod help;
pub mod list;
pub mod price;
pub mod remove;
pub mod select;
pub mod status;
pub mod tax;

use tracing::warn;

use crate::AppState;

/// Outcome of handling one input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Parse one line of input and dispatch to the matching command.
///
/// Command errors are printed, never propagated: a bad line leaves the
/// session (and all state) exactly as it was.
pub fn handle_line(state: &mut AppState, line: &str) -> Outcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Outcome::Continue;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "add" => add::execute(state, args),
        "edit" => edit::execute(state, args),
        "remove" | "rm" => remove::execute(state, args),
        "list" | "ls" => list::execute(state, args),
        "tax" => tax::execute(state, args),
        "price" => price::execute(state, args),
        "calc" | "calculate" => calculate::execute(state, args),
        "select" => select::execute(state, args),
        "status" | "donut" => status::execute(state, args),
        "chart" => chart::execute(state, args),
        "export" => export::execute(state, args),
        "help" | "?" => help::execute(args),
        "quit" | "exit" => return Outcome::Quit,
        _ => {
            println!(
                "❓ Unknown command '{}'. Type 'help' for the command list.",
                command
            );
            return Outcome::Continue;
        }
    };

    if let Err(e) = result {
        warn!("Command '{}' failed: {}", command, e);
        println!("{}", e);
    }

    Outcome::Continue
}
