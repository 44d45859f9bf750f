use super::action::Action;
use super::betting::BettingState;
use super::encoder::Encoder;
use super::strategy::Strategy;
use super::trajectory::Trajectory;
use crate::ALPHA;
use crate::EPSILON;
use crate::EPSILON_ANNEAL_GAMES;
use crate::EPSILON_FLOOR;
use crate::GAMMA;
use crate::N_ACTIONS;
use crate::Probability;
use crate::Utility;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::ranking::HandRank;
use crate::cards::street::Street;
use crate::preflop::class::Class;
use crate::preflop::table::Table;
use crate::save::Disk;
use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

/// rank substituted whenever the best-effort strength computation fails
const MIDPOINT_RANK: Utility = 0.5 * HandRank::COUNT as Utility;

/// Tabular Q-learning agent over discretized hold-em states.
///
/// Owns its Q-table, its trajectory, and its injected preflop table; one
/// agent, one strategy file. Decisions run strength -> encode -> mask ->
/// epsilon-greedy; learning happens once per hand when the terminal reward
/// arrives, walking the trajectory backwards with a discounted copy of the
/// same reward as every step's target.
pub struct QBot {
    q: Vec<[Utility; N_ACTIONS]>,
    alpha: Utility,
    gamma: Utility,
    epsilon: Probability,
    games: usize,
    trajectory: Trajectory,
    encoder: Encoder,
    preflop: Table,
    path: PathBuf,
    rng: SmallRng,
}

impl QBot {
    /// restore from the strategy file at path, or start fresh when it is
    /// missing, corrupt, or shaped for a different state space
    pub fn new(buckets: usize, preflop: Table, path: PathBuf) -> Self {
        let encoder = Encoder::new(buckets);
        let mut rng = SmallRng::from_os_rng();
        let (q, games) = match Strategy::load(&path) {
            Ok(s) if s.conforms(encoder.states(), N_ACTIONS) => {
                log::info!(
                    "strategy loaded from {} after {} games",
                    path.display(),
                    s.games_played
                );
                let q = s
                    .q_table
                    .into_iter()
                    .map(|row| [row[0], row[1], row[2]])
                    .collect();
                (q, s.games_played)
            }
            Ok(_) => {
                log::warn!(
                    "strategy at {} does not fit {} states, starting fresh",
                    path.display(),
                    encoder.states()
                );
                (Self::fresh(encoder.states(), &mut rng), 0)
            }
            Err(e) => {
                log::warn!("{:#}; starting fresh", e);
                (Self::fresh(encoder.states(), &mut rng), 0)
            }
        };
        Self {
            q,
            alpha: ALPHA,
            gamma: GAMMA,
            epsilon: EPSILON,
            games,
            trajectory: Trajectory::default(),
            encoder,
            preflop,
            path,
            rng,
        }
    }

    /// small random initial values avoid exact ties at the start of play
    fn fresh(states: usize, rng: &mut SmallRng) -> Vec<[Utility; N_ACTIONS]> {
        (0..states)
            .map(|_| std::array::from_fn(|_| rng.random::<Utility>() * 0.1))
            .collect()
    }

    pub fn games(&self) -> usize {
        self.games
    }

    /// the full decision pipeline for one betting opportunity
    pub fn decide(
        &mut self,
        street: Street,
        hole: Hole,
        board: Hand,
        betting: BettingState,
        raise_cap_reached: bool,
    ) -> Action {
        let rank = self.strength(hole, board);
        let state = self.encoder.encode(street, rank, betting);
        let valid = betting.options(raise_cap_reached);
        debug_assert!(!valid.is_empty(), "betting state offers no action");
        if valid.is_empty() {
            // defensive only; options() never returns an empty set
            log::error!("no valid actions while {}, checking through", betting);
            return Action::CheckCall;
        }
        let action = self.choose(state, &valid);
        self.record(state, action);
        action
    }

    /// one terminal update per hand, then persist. a failed write is
    /// logged and the in-memory table remains in use
    pub fn notify_hand_result(&mut self, reward: Utility) {
        self.update(reward);
        if let Err(e) = self.save() {
            log::error!("{:#}", e);
        }
    }

    /// best-effort hand strength on the HandRank scale. preflop goes
    /// through the class table; postflop through the evaluator; any
    /// failure yields the midpoint rank so the hand can proceed
    pub fn strength(&self, hole: Hole, board: Hand) -> Utility {
        if board.size() == 0 {
            return self.preflop.rank(Class::from(hole));
        }
        let full = Hand::from(u64::from(Hand::from(hole)) | u64::from(board));
        match Evaluator::from(full).rank() {
            Ok(rank) => Utility::from(rank),
            Err(e) => {
                log::warn!("evaluation failed ({:#}), using midpoint rank", e);
                MIDPOINT_RANK
            }
        }
    }

    /// epsilon-greedy over the masked action set
    pub fn choose(&mut self, state: usize, valid: &[Action]) -> Action {
        assert!(!valid.is_empty(), "at least one valid action");
        if self.rng.random::<Probability>() < self.exploration() {
            valid[self.rng.random_range(0..valid.len())]
        } else {
            self.greedy(state, valid)
        }
    }

    pub fn record(&mut self, state: usize, action: Action) {
        self.trajectory.record(state, action);
    }

    /// walk the trajectory in reverse; step t from the end learns toward
    /// reward * gamma^t. Monte-Carlo credit assignment, not TD(0): every
    /// visited pair targets a discounted copy of the same terminal reward
    pub fn update(&mut self, reward: Utility) {
        for (t, (state, action)) in self.trajectory.backwards().enumerate() {
            let target = reward * self.gamma.powi(t as i32);
            let q = &mut self.q[state][usize::from(action)];
            *q += self.alpha * (target - *q);
        }
        self.trajectory.clear();
        self.games += 1;
    }

    pub fn save(&self) -> Result<()> {
        Strategy {
            q_table: self.q.iter().map(|row| row.to_vec()).collect(),
            games_played: self.games,
        }
        .save(&self.path)
    }

    /// exploration anneals linearly with games played, floored so the
    /// policy never goes fully greedy
    fn exploration(&self) -> Probability {
        let anneal = 1.0 - self.games as Probability / EPSILON_ANNEAL_GAMES as Probability;
        EPSILON_FLOOR.max(self.epsilon * anneal)
    }

    /// argmax over valid actions with invalid entries masked to -inf;
    /// ties break toward the lowest action index
    fn greedy(&self, state: usize, valid: &[Action]) -> Action {
        let row = &self.q[state];
        let mut best: Option<(Action, Utility)> = None;
        for action in Action::all() {
            let q = if valid.contains(action) {
                row[usize::from(*action)]
            } else {
                Utility::NEG_INFINITY
            };
            match best {
                Some((_, held)) if held >= q => {}
                _ => best = Some((*action, q)),
            }
        }
        best.expect("three actions").0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> QBot {
        let encoder = Encoder::new(20);
        QBot {
            q: vec![[0.0; N_ACTIONS]; encoder.states()],
            alpha: ALPHA,
            gamma: GAMMA,
            epsilon: 0.0,
            games: 0,
            trajectory: Trajectory::default(),
            encoder,
            preflop: Table::builtin(),
            path: std::env::temp_dir().join(format!("qholdem-agent-{}.json", std::process::id())),
            rng: SmallRng::seed_from_u64(0),
        }
    }

    #[test]
    fn greedy_is_deterministic() {
        let mut bot = bot();
        bot.q[7] = [0.3, 0.9, 0.5];
        let valid = BettingState::Facing.options(false);
        let first = bot.greedy(7, &valid);
        for _ in 0..100 {
            assert_eq!(bot.greedy(7, &valid), first);
        }
        assert_eq!(first, Action::CheckCall);
    }

    #[test]
    fn greedy_masks_invalid_actions() {
        let mut bot = bot();
        bot.q[3] = [9.0, 0.1, 0.2];
        // fold is the argmax but illegal when unopened
        let valid = BettingState::Unopened.options(false);
        assert_eq!(bot.greedy(3, &valid), Action::Raise);
    }

    #[test]
    fn greedy_ties_break_low() {
        let mut bot = bot();
        bot.q[4] = [0.0, 0.5, 0.5];
        let valid = BettingState::Unopened.options(false);
        assert_eq!(bot.greedy(4, &valid), Action::CheckCall);
    }

    #[test]
    fn update_walks_trajectory_backwards() {
        let mut bot = bot();
        let state = 11;
        bot.record(state, Action::CheckCall);
        bot.record(state, Action::CheckCall);
        bot.record(state, Action::CheckCall);
        bot.update(100.0);
        // targets 100, 90, 81 applied in sequence at alpha 0.1
        let expected = {
            let mut q = 0.0;
            for target in [100.0, 90.0, 81.0] {
                q += 0.1 * (target - q);
            }
            q
        };
        assert!((bot.q[state][1] - expected).abs() < 1e-4);
        assert!((expected - 24.3f32).abs() < 1e-4);
    }

    #[test]
    fn update_clears_trajectory_and_counts_game() {
        let mut bot = bot();
        bot.record(1, Action::Raise);
        bot.record(2, Action::CheckCall);
        assert_eq!(bot.trajectory.len(), 2);
        bot.update(-10.0);
        assert!(bot.trajectory.is_empty());
        assert_eq!(bot.games(), 1);
    }

    #[test]
    fn exploration_anneals_to_floor() {
        let mut bot = bot();
        bot.epsilon = EPSILON;
        assert!((bot.exploration() - 0.1).abs() < 1e-6);
        bot.games = 500;
        assert!((bot.exploration() - 0.05).abs() < 1e-6);
        bot.games = 1000;
        assert!((bot.exploration() - EPSILON_FLOOR).abs() < 1e-6);
        bot.games = 5000;
        assert!((bot.exploration() - EPSILON_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn fresh_tables_are_small_random() {
        let mut rng = SmallRng::seed_from_u64(7);
        let q = QBot::fresh(320, &mut rng);
        assert_eq!(q.len(), 320);
        assert!(q.iter().flatten().all(|v| (0.0..0.1).contains(v)));
        assert!(q.iter().flatten().any(|v| *v != q[0][0]));
    }

    #[test]
    fn decide_records_the_chosen_action() {
        let mut bot = bot();
        let hole = Hole::from("As Ah");
        let action = bot.decide(Street::Pref, hole, Hand::empty(), BettingState::Facing, false);
        assert_eq!(bot.trajectory.len(), 1);
        assert_eq!(bot.trajectory.backwards().next(), Some((
            bot.encoder.encode(Street::Pref, bot.strength(hole, Hand::empty()), BettingState::Facing),
            action,
        )));
    }

    #[test]
    fn preflop_strength_uses_class_table() {
        let bot = bot();
        let aces = bot.strength(Hole::from("As Ah"), Hand::empty());
        let junk = bot.strength(Hole::from("3s 2h"), Hand::empty());
        assert_eq!(aces, 0.0);
        assert!(junk > aces);
    }

    #[test]
    fn postflop_strength_uses_evaluator() {
        let bot = bot();
        let rank = bot.strength(Hole::from("As Ah"), Hand::from("Ad Ac Ks"));
        assert_eq!(rank, 11.0);
    }

    #[test]
    fn overlapping_board_degrades_to_midpoint() {
        let bot = bot();
        // hole card repeated on board: union has four cards, evaluation fails
        let rank = bot.strength(Hole::from("As Ah"), Hand::from("As Kd 2c"));
        assert_eq!(rank, MIDPOINT_RANK);
    }

    #[test]
    fn saved_strategy_restores_argmax() {
        let path = std::env::temp_dir().join(format!("qholdem-restore-{}.json", std::process::id()));
        let mut bot = bot();
        bot.path = path.clone();
        bot.q[42] = [0.25, -0.5, 0.75];
        bot.games = 123;
        bot.save().unwrap();
        let restored = QBot::new(20, Table::builtin(), path.clone());
        assert_eq!(restored.games(), 123);
        assert_eq!(restored.q[42], [0.25, -0.5, 0.75]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_strategy_starts_fresh() {
        let path = std::env::temp_dir().join(format!("qholdem-missing-{}.json", std::process::id()));
        let bot = QBot::new(20, Table::builtin(), path);
        assert_eq!(bot.games(), 0);
        assert!(bot.q.iter().flatten().all(|v| (0.0..0.1).contains(v)));
    }
}
