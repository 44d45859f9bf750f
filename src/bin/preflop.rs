//! Preflop equity table generator.
//!
//! Monte-Carlo simulation of the 169 canonical starting-hand classes
//! against a random opponent over full board runouts. Classes simulate in
//! parallel; the resulting JSON carries generation-side keys ("AKo").

use clap::Parser;
use qholdem::preflop::table::Table;
use qholdem::save::Disk;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Generate the preflop strength table by Monte-Carlo simulation")]
struct Args {
    /// simulation trials per hand class
    #[arg(long, default_value_t = 5000)]
    trials: usize,
    /// output file
    #[arg(long, default_value = "preflop_strength.json")]
    out: PathBuf,
}

fn main() {
    qholdem::log();
    let args = Args::parse();
    log::info!("simulating 169 classes at {} trials each", args.trials);
    let table = Table::generate(args.trials);
    match table.save(&args.out) {
        Ok(()) => log::info!("saved preflop strengths to {}", args.out.display()),
        Err(e) => log::error!("{:#}", e),
    }
}
