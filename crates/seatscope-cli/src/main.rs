//! Seatscope - seat part catalog analytics
//!
//! A CLI tool for filtering a seat part catalog, comparing parts,
//! ranking competitors and estimating freight.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
