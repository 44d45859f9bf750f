//! Hand evaluation and tabular Q-learning for heads-up fixed-limit Texas Hold-Em.
//!
//! The `cards` module owns card encodings and the constant-time hand
//! evaluator. The `preflop` module maps the 169 canonical starting-hand
//! classes to Monte-Carlo equity. The `qlearn` module turns (street, rank,
//! betting state) into a discrete state index and learns a Q-table over it.
//! The `play` module is a self-play environment that drives two agents
//! through complete fixed-limit hands.

pub mod cards;
pub mod play;
pub mod preflop;
pub mod qlearn;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bet amounts, and pot totals.
pub type Chips = i16;
/// Expected values, rewards, and Q-table entries.
pub type Utility = f32;
/// Sampling and exploration probabilities.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE STAKES
// ============================================================================
/// Small blind posted preflop.
pub const S_BLIND: Chips = 1;
/// Big blind posted preflop.
pub const B_BLIND: Chips = 2;
/// Fixed bet size on preflop and flop.
pub const SMALL_BET: Chips = 2;
/// Fixed bet size on turn and river.
pub const BIG_BET: Chips = 4;
/// Starting stack for each seat at the beginning of a hand.
pub const STACK: Chips = 1000;
/// Maximum raises allowed within a single betting round.
pub const MAX_RAISES_PER_STREET: usize = 4;

// ============================================================================
// Q-LEARNING PARAMETERS
// ============================================================================
/// Number of discrete actions: fold, check/call, raise.
pub const N_ACTIONS: usize = 3;
/// Default number of hand-strength buckets per street.
pub const N_BUCKETS: usize = 20;
/// Learning rate for the end-of-hand trajectory update.
pub const ALPHA: Utility = 0.1;
/// Per-step discount applied walking the trajectory back from the end.
pub const GAMMA: Utility = 0.9;
/// Base exploration rate before annealing.
pub const EPSILON: Probability = 0.1;
/// Exploration never anneals below this floor.
pub const EPSILON_FLOOR: Probability = 0.01;
/// Games over which exploration anneals from EPSILON toward the floor.
pub const EPSILON_ANNEAL_GAMES: usize = 1000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
