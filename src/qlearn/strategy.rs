use crate::Utility;
use crate::save::Disk;
use serde::Deserialize;
use serde::Serialize;

/// Durable record of a Q-table and its training age. The games counter
/// survives restarts so exploration keeps annealing from where it left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub q_table: Vec<Vec<Utility>>,
    pub games_played: usize,
}

impl Disk for Strategy {
    fn name() -> &'static str {
        "strategy"
    }
}

impl Strategy {
    /// a loaded record is only usable if it matches the agent's state space
    /// and carries finite values throughout
    pub fn conforms(&self, states: usize, actions: usize) -> bool {
        self.q_table.len() == states
            && self
                .q_table
                .iter()
                .all(|row| row.len() == actions && row.iter().all(|q| q.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conformance() {
        let strategy = Strategy {
            q_table: vec![vec![0.0; 3]; 320],
            games_played: 5,
        };
        assert!(strategy.conforms(320, 3));
        assert!(!strategy.conforms(321, 3));
        assert!(!strategy.conforms(320, 2));
    }

    #[test]
    fn rejects_non_finite_entries() {
        let mut strategy = Strategy {
            q_table: vec![vec![0.0; 3]; 4],
            games_played: 0,
        };
        strategy.q_table[2][1] = Utility::NAN;
        assert!(!strategy.conforms(4, 3));
    }
}
