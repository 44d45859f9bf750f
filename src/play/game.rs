use super::seat::Seat;
use crate::B_BLIND;
use crate::BIG_BET;
use crate::Chips;
use crate::MAX_RAISES_PER_STREET;
use crate::S_BLIND;
use crate::SMALL_BET;
use crate::STACK;
use crate::Utility;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::qlearn::action::Action;
use crate::qlearn::agent::QBot;
use crate::qlearn::betting::BettingState;
use rand::Rng;

/// outcome of one completed hand; winner is None on a chopped pot
#[derive(Debug, Clone, Copy)]
pub struct HandResult {
    pub winner: Option<usize>,
    pub pot: Chips,
    pub rewards: [Utility; 2],
}

/// Heads-up fixed-limit self-play environment.
///
/// Owns two agents and drives them through complete hands: deal, four
/// betting rounds with blind posting and a per-street raise cap, then
/// fold settlement or showdown. Each hand ends with exactly one terminal
/// reward notification per agent.
pub struct SelfPlay {
    bots: [QBot; 2],
    button: usize,
}

impl SelfPlay {
    pub fn new(bots: [QBot; 2]) -> Self {
        Self { bots, button: 0 }
    }

    pub fn bot(&self, i: usize) -> &QBot {
        &self.bots[i]
    }

    /// fixed-limit sizing: small bet early streets, big bet late
    fn bet_size(street: Street) -> Chips {
        match street {
            Street::Pref | Street::Flop => SMALL_BET,
            Street::Turn | Street::Rive => BIG_BET,
        }
    }

    pub fn play_hand(&mut self) -> HandResult {
        self.button = rand::rng().random_range(0..2);
        let mut deck = Deck::new();
        let holes = [deck.hole(), deck.hole()];
        let runout = (0..5).map(|_| deck.draw()).collect::<Vec<Card>>();
        let mut seats = [Seat::new(STACK), Seat::new(STACK)];
        let mut folded = None;
        for street in Street::all().iter().copied() {
            let board = Hand::from(runout[..street.n_observed()].to_vec());
            folded = self.betting_round(street, board, &holes, &mut seats);
            if folded.is_some() {
                break;
            }
            seats.iter_mut().for_each(Seat::next_street);
        }
        let pot = seats[0].spent() + seats[1].spent();
        let winner = match folded {
            Some(folder) => Some(1 - folder),
            None => {
                let board = Hand::from(runout.clone());
                let zero = self.bots[0].strength(holes[0], board);
                let one = self.bots[1].strength(holes[1], board);
                // lower rank is the stronger hand
                match zero.partial_cmp(&one).expect("finite ranks") {
                    std::cmp::Ordering::Less => Some(0),
                    std::cmp::Ordering::Greater => Some(1),
                    std::cmp::Ordering::Equal => None,
                }
            }
        };
        let rewards = match winner {
            Some(w) => {
                seats[w].win(pot);
                let mut rewards = [0.0; 2];
                rewards[w] = pot as Utility;
                rewards[1 - w] = -(pot as Utility);
                rewards
            }
            None => {
                seats[0].win(pot / 2);
                seats[1].win(pot / 2);
                [0.0, 0.0]
            }
        };
        log::debug!(
            "{} | {} vs {} | pot {} | {:?}",
            Hand::from(runout),
            holes[0],
            holes[1],
            pot,
            winner,
        );
        self.bots[0].notify_hand_result(rewards[0]);
        self.bots[1].notify_hand_result(rewards[1]);
        HandResult {
            winner,
            pot,
            rewards,
        }
    }

    /// one street of betting. returns the seat that folded, if any.
    /// the small blind opens preflop, the button opens postflop. a street
    /// ends once both seats have acted on matched stakes
    fn betting_round(
        &mut self,
        street: Street,
        board: Hand,
        holes: &[Hole; 2],
        seats: &mut [Seat; 2],
    ) -> Option<usize> {
        let mut raises = 0;
        let mut acted = [false; 2];
        let mut acting = match street {
            Street::Pref => 1 - self.button,
            _ => self.button,
        };
        if street == Street::Pref {
            seats[1 - self.button].bet(S_BLIND);
            seats[self.button].bet(B_BLIND);
        }
        loop {
            let opponent = 1 - acting;
            let capped = raises >= MAX_RAISES_PER_STREET;
            let betting = BettingState::from((seats[acting].stake(), seats[opponent].stake()));
            let action = self.bots[acting].decide(street, holes[acting], board, betting, capped);
            log::debug!("{} seat {} {} while {}", street, acting, action, betting);
            match action {
                Action::Fold => return Some(acting),
                Action::CheckCall => {
                    let owed = seats[opponent].stake() - seats[acting].stake();
                    seats[acting].bet(owed.max(0));
                }
                Action::Raise if raises < MAX_RAISES_PER_STREET => {
                    let target = seats[opponent].stake() + Self::bet_size(street);
                    seats[acting].bet(target - seats[acting].stake());
                    raises += 1;
                }
                Action::Raise => {
                    // cap reached outside a Facing state; degrade to a call
                    let owed = seats[opponent].stake() - seats[acting].stake();
                    seats[acting].bet(owed.max(0));
                }
            }
            acted[acting] = true;
            if acted[0] && acted[1] && seats[0].stake() == seats[1].stake() {
                return None;
            }
            acting = opponent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflop::table::Table;

    fn scratch(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("qholdem-play-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn hands_are_zero_sum() {
        let paths = [scratch("zs0"), scratch("zs1")];
        let bots = [
            QBot::new(20, Table::builtin(), paths[0].clone()),
            QBot::new(20, Table::builtin(), paths[1].clone()),
        ];
        let mut game = SelfPlay::new(bots);
        for _ in 0..25 {
            let result = game.play_hand();
            assert!(result.pot > 0);
            assert_eq!(result.rewards[0] + result.rewards[1], 0.0);
            match result.winner {
                Some(w) => assert_eq!(result.rewards[w], result.pot as Utility),
                None => assert_eq!(result.rewards, [0.0, 0.0]),
            }
        }
        for path in paths {
            std::fs::remove_file(&path).ok();
        }
    }

    #[test]
    fn every_hand_updates_both_agents_once() {
        let paths = [scratch("up0"), scratch("up1")];
        let bots = [
            QBot::new(20, Table::builtin(), paths[0].clone()),
            QBot::new(20, Table::builtin(), paths[1].clone()),
        ];
        let mut game = SelfPlay::new(bots);
        for hands in 1..=10 {
            game.play_hand();
            assert_eq!(game.bot(0).games(), hands);
            assert_eq!(game.bot(1).games(), hands);
        }
        for path in paths {
            std::fs::remove_file(&path).ok();
        }
    }
}
