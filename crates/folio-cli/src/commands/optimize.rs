//! Optimize command: run the selection search and print the report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Args;
use tabled::Tabled;

use folio_core::catalog::load_catalog;
use folio_core::{select_portfolio, Selection};

use crate::output::{format_amount, print_table};

/// Arguments for the optimize command.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Input catalog file
    #[arg(long, default_value = "catalog.csv")]
    pub catalog: PathBuf,

    /// Total cash available for investment
    #[arg(long)]
    pub cash: f64,

    /// Maximum allocation per asset, as a percentage of cash
    #[arg(long, default_value = "100")]
    pub max_allocation: f64,
}

/// One report row per held position.
#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Lots")]
    lots: u32,
    #[tabled(rename = "Share Price")]
    price: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Execute the optimize command.
pub fn execute(args: OptimizeArgs) -> Result<()> {
    let assets = load_catalog(&args.catalog)?;

    // The search runs on its own thread purely so this one can time it;
    // the outcome is identical either way.
    let max_allocation = args.max_allocation;
    let cash = args.cash;
    let started = Instant::now();
    let selection = std::thread::spawn(move || select_portfolio(&assets, max_allocation, cash))
        .join()
        .map_err(|_| anyhow!("selection search panicked"))?;
    let elapsed = started.elapsed();

    report(&selection, cash, elapsed.as_secs_f64());
    Ok(())
}

/// Prints the selection report.
fn report(selection: &Selection, cash: f64, elapsed_secs: f64) {
    println!("\nBest portfolio:\n");

    let rows: Vec<PositionRow> = selection
        .portfolio
        .positions()
        .map(|position| PositionRow {
            id: position.asset.id.clone(),
            name: position.asset.name.clone(),
            lots: position.lots,
            price: format_amount(position.asset.price),
            cost: format_amount(position.cost()),
        })
        .collect();

    print_table(&rows);

    println!();
    println!("Invested:        {}", format_amount(selection.invested()));
    println!(
        "Residual cash:   {}",
        format_amount(selection.residual_cash(cash))
    );
    println!(
        "Projected value: {}",
        format_amount(selection.projected_value)
    );
    println!("Projected gain:  {}", format_amount(selection.gain()));
    println!("Gain:            {:.2}%", selection.gain_pct(cash));
    println!("Elapsed:         {elapsed_secs:.3}s");
}
