//! Folio CLI - equity screening and constrained portfolio selection.
//!
//! # Usage
//!
//! ```bash
//! # Download the candidate universe
//! folio listings --url https://example.com/universe.json
//!
//! # Screen it into a growth-ranked catalog
//! folio screen --suffix .JK
//!
//! # Select the best portfolio for the budget
//! folio optimize --cash 500000000 --max-allocation 30
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Listings(args) => commands::listings::execute(args).await?,
        Commands::Screen(args) => commands::screen::execute(args).await?,
        Commands::Optimize(args) => commands::optimize::execute(args)?,
    }

    Ok(())
}
