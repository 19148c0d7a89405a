//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{ListingsArgs, OptimizeArgs, ScreenArgs};

/// Folio - equity screening and constrained portfolio selection
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Download the candidate universe to a listings file
    Listings(ListingsArgs),

    /// Screen the universe into a growth-ranked catalog
    Screen(ScreenArgs),

    /// Select the best portfolio from a catalog
    Optimize(OptimizeArgs),
}
