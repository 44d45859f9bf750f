use super::class::Class;
use crate::Probability;
use crate::Utility;
use crate::cards::deck::Deck;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand;
use crate::cards::ranking::HandRank;
use crate::save::Disk;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Monte-Carlo preflop equity for the 169 canonical starting-hand classes.
///
/// On disk the generator writes offsuit keys with an explicit "o" tag
/// ("AKo"); lookups use the untagged form ("AK"). Hydration normalizes the
/// tagged keys so offsuit lookups never silently miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table(BTreeMap<String, Probability>);

impl Disk for Table {
    fn name() -> &'static str {
        "preflop"
    }
}

impl Table {
    /// load from disk; a missing or corrupt file falls back to the
    /// built-in subset and is never fatal
    pub fn hydrate(path: &Path) -> Self {
        match <Self as Disk>::load(path) {
            Ok(table) => {
                log::info!("loaded preflop table with {} classes", table.0.len());
                table.normalized()
            }
            Err(e) => {
                log::warn!("{:#}; using built-in preflop values", e);
                Self::builtin()
            }
        }
    }

    /// the default subset of common hands used when no table is on disk
    pub fn builtin() -> Self {
        Self(
            [
                ("AA", 1.0),
                ("KK", 0.95),
                ("QQ", 0.9),
                ("JJ", 0.85),
                ("TT", 0.8),
                ("AKs", 0.82),
                ("AQs", 0.78),
                ("AJs", 0.75),
                ("AKo", 0.75),
                ("22", 0.5),
                ("32o", 0.2),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        )
        .normalized()
    }

    /// strip generation-side "o" tags down to lookup keys
    fn normalized(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(k, v)| match k.strip_suffix('o') {
                    Some(stripped) => (stripped.to_string(), v),
                    None => (k, v),
                })
                .collect(),
        )
    }

    /// equity in [0, 1]; unknown classes fall back to the midpoint
    pub fn equity(&self, class: Class) -> Probability {
        match self.0.get(&class.to_string()) {
            Some(equity) => *equity,
            None => {
                log::debug!("no preflop entry for {}, using 0.5", class);
                0.5
            }
        }
    }

    /// equity projected onto the HandRank scale, lower is stronger
    pub fn rank(&self, class: Class) -> Utility {
        (1.0 - self.equity(class)) * HandRank::COUNT as Utility
    }

    /// estimate one class's equity against a random opponent over full
    /// runouts: win = 1, tie = 1/2, averaged over the class's combos
    pub fn simulate(class: Class, trials: usize) -> Probability {
        let combos = class.combos();
        let trials = std::cmp::max(1, trials / combos.len());
        combos
            .iter()
            .map(|hero| {
                let mut score = 0.0;
                for _ in 0..trials {
                    let mut deck = Deck::new();
                    for card in Hand::from(*hero) {
                        deck.remove(card);
                    }
                    let villain = deck.hole();
                    let board = (0..5)
                        .map(|_| deck.draw())
                        .map(Hand::from)
                        .fold(Hand::empty(), Hand::add);
                    let hero = Evaluator::from(Hand::add(Hand::from(*hero), board))
                        .rank()
                        .expect("seven cards");
                    let villain = Evaluator::from(Hand::add(Hand::from(villain), board))
                        .rank()
                        .expect("seven cards");
                    score += match hero.cmp(&villain) {
                        std::cmp::Ordering::Less => 1.0,
                        std::cmp::Ordering::Equal => 0.5,
                        std::cmp::Ordering::Greater => 0.0,
                    };
                }
                score / trials as Probability
            })
            .sum::<Probability>()
            / combos.len() as Probability
    }

    /// simulate all 169 classes in parallel. keys carry the generation-side
    /// offsuit tag, matching the persisted file format
    pub fn generate(trials: usize) -> Self {
        Self(
            Class::exhaust()
                .into_par_iter()
                .map(|class| {
                    let equity = Self::simulate(class, trials);
                    log::info!("{:<4} {:.4}", class.tag(), equity);
                    (class.tag(), equity)
                })
                .collect(),
        )
    }
}
