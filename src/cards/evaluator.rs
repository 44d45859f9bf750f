use super::hand::Hand;
use super::hands::HandIterator;
use super::lookup::Lookup;
use super::ranking::HandRank;
use anyhow::Result;
use anyhow::bail;

/// Constant-time evaluation of 5, 6, and 7 card hands.
///
/// Five cards resolve in O(1) against the startup-built tables: a flush
/// check via the suit bitmasks, then the distinct-rank table, then the
/// prime-product table. Six and seven cards take the minimum over every
/// 5-card subset. Hand is an unordered set, so evaluation is invariant to
/// input ordering by construction.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn rank(&self) -> Result<HandRank> {
        match self.0.size() {
            5 => Ok(Self::eval5(self.0)),
            6 | 7 => Ok(self.best5()),
            n => bail!("invalid hand: expected 5 to 7 distinct cards, got {}", n),
        }
    }

    /// minimum eval5 over all C(6,5) or C(7,5) subsets, no early exit
    fn best5(&self) -> HandRank {
        HandIterator::from((5, self.0.complement()))
            .map(Self::eval5)
            .min()
            .expect("at least one 5-card subset")
    }

    fn eval5(hand: Hand) -> HandRank {
        let cards = hand.into_iter().map(u32::from).collect::<Vec<u32>>();
        let q = (cards.iter().fold(0, |a, c| a | c) >> 16) as u16;
        let lookup = Lookup::instance();
        if cards.iter().fold(0xF000, |a, c| a & c) != 0 {
            return lookup.flush(q);
        }
        if let Some(rank) = lookup.unique(q) {
            return rank;
        }
        let product = cards.iter().map(|c| c & 0xFF).product::<u32>();
        lookup
            .paired(product)
            .expect("every 5-card multiset is ranked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ranking::Ranking;

    fn rank(s: &str) -> HandRank {
        Evaluator::from(Hand::from(s)).rank().unwrap()
    }

    #[test]
    fn permutation_invariance() {
        assert_eq!(rank("As Kh Qd Jc 9s"), rank("9s Jc Qd Kh As"));
        assert_eq!(rank("2c 2d 2h 2s 3c"), rank("3c 2s 2h 2d 2c"));
    }

    #[test]
    fn category_ordering() {
        let ranks = [
            rank("Ts Js Qs Ks As"), // royal flush
            rank("9s Ts Js Qs Ks"), // straight flush
            rank("As Ah Ad Ac Ks"), // four of a kind
            rank("As Ah Ad Kc Ks"), // full house
            rank("As Ks Qs Js 9s"), // flush
            rank("Ts Jh Qd Kc As"), // straight
            rank("As Ah Ad Kc Qs"), // three of a kind
            rank("As Ah Kd Kc Qs"), // two pair
            rank("As Ah Kd Qc Js"), // one pair
            rank("As Kh Qd Jc 9s"), // high card
        ];
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn known_rank_values() {
        assert_eq!(u16::from(rank("Ts Js Qs Ks As")), 1);
        assert_eq!(u16::from(rank("As Ah Ad Ac Ks")), 11);
        assert_eq!(u16::from(rank("Ts Jh Qd Kc As")), 1600);
        assert_eq!(u16::from(rank("As 2h 3d 4c 5s")), 1609);
        assert_eq!(u16::from(rank("7s 5h 4d 3c 2s")), 7462);
    }

    #[test]
    fn six_and_seven_card_royal() {
        let royal = rank("Ts Js Qs Ks As");
        assert_eq!(rank("Ts Js Qs Ks As 2d"), royal);
        assert_eq!(rank("Ts Js Qs Ks As 2d 7h"), royal);
    }

    #[test]
    fn wheel_between_straights_and_high_cards() {
        let wheel = rank("As 2h 3d 4c 5s");
        let six_high = rank("2s 3h 4d 5c 6s");
        let best_high_card = rank("As Kh Qd Jc 9s");
        assert!(six_high < wheel);
        assert!(wheel < best_high_card);
    }

    #[test]
    fn seven_card_uses_best_subset() {
        // pair of aces plus a flush on board
        let r = rank("Ah Ac 4s 7s 9s Js Ks");
        assert_eq!(Ranking::from(r), Ranking::Flush);
    }

    #[test]
    fn malformed_input_rejected() {
        assert!(Evaluator::from(Hand::from("As Kh")).rank().is_err());
        assert!(Evaluator::from(Hand::from("As As Kh Qd Jc")).rank().is_err());
        assert!(
            Evaluator::from(Hand::from("As Kh Qd Jc 9s 8d 7c 6h"))
                .rank()
                .is_err()
        );
    }

    #[test]
    fn flush_beats_straight_on_six_cards() {
        let r = rank("4h 6h 7h 8h 9h Ts");
        assert_eq!(Ranking::from(r), Ranking::Flush);
    }
}
