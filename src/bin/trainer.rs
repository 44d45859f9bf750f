//! Self-play training binary.
//!
//! Two Q-learning agents play fixed-limit heads-up hands against each
//! other, each learning from its own trajectory and persisting its own
//! strategy file after every hand.

use clap::Parser;
use qholdem::play::game::SelfPlay;
use qholdem::preflop::table::Table;
use qholdem::qlearn::agent::QBot;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Train Q-learning agents through fixed-limit self-play")]
struct Args {
    /// number of hands to play
    #[arg(default_value_t = 1000)]
    iterations: usize,
    /// hand-strength buckets per street
    #[arg(long, default_value_t = qholdem::N_BUCKETS)]
    buckets: usize,
    /// strategy file for the first agent
    #[arg(long, default_value = "q_strategy.json")]
    strategy: PathBuf,
    /// strategy file for the sparring agent
    #[arg(long, default_value = "training_q_strategy.json")]
    sparring: PathBuf,
    /// preflop equity table
    #[arg(long, default_value = "preflop_strength.json")]
    preflop: PathBuf,
    /// suppress progress output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    qholdem::log();
    let args = Args::parse();
    let preflop = Table::hydrate(&args.preflop);
    let bots = [
        QBot::new(args.buckets, preflop.clone(), args.strategy),
        QBot::new(args.buckets, preflop, args.sparring),
    ];
    let mut game = SelfPlay::new(bots);
    let mut wins = [0usize; 3];
    let mut reward = 0f32;
    let interval = std::cmp::max(1, args.iterations / 10);
    log::info!("starting self-play training for {} hands", args.iterations);
    for i in 1..=args.iterations {
        let result = game.play_hand();
        match result.winner {
            Some(w) => wins[w] += 1,
            None => wins[2] += 1,
        }
        reward += result.rewards[0];
        if !args.quiet && i % interval == 0 {
            log::info!(
                "{:>8} hands | wins {:>5.1}% / {:>5.1}% | splits {:>4.1}% | avg reward {:+.2}",
                i,
                wins[0] as f32 / i as f32 * 100.0,
                wins[1] as f32 / i as f32 * 100.0,
                wins[2] as f32 / i as f32 * 100.0,
                reward / i as f32,
            );
        }
    }
    log::info!("training complete after {} hands", args.iterations);
}
