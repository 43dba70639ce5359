use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, Utc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod services;
mod utils;

use commands::Outcome;
use models::ChartDataPoint;
use services::grant_service::GrantBook;
use utils::dates::month_start;

/// Everything the session knows. Replaced piecewise by commands; the
/// schedule is only ever swapped wholesale by a recalculation.
pub struct AppState {
    pub grants: GrantBook,
    pub tax_percentage: f64,
    pub price_per_share: f64,
    pub chart_data: Vec<ChartDataPoint>,
    pub selected_month: NaiveDate,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        AppState {
            grants: GrantBook::new(),
            tax_percentage: 25.0,
            price_per_share: 0.0,
            chart_data: Vec::new(),
            selected_month: month_start(today),
        }
    }
}

fn main() {
    // Initialize tracing; RUST_LOG overrides the quiet default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("optvest=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    println!("=========================================================");
    println!(
        " optvest {} - stock option grant vesting calculator",
        env!("CARGO_PKG_VERSION")
    );
    println!("=========================================================");
    println!("Type 'help' to list commands, 'quit' to exit.");
    println!();

    info!("Session started");

    let mut state = AppState::new(Utc::now().date_naive());
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        print!("optvest> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match lines.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                if commands::handle_line(&mut state, line.trim()) == Outcome::Quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    info!("Session ended");
}
