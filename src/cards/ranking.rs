/// A hand's rank on the canonical 1..=7462 scale. Lower is stronger:
/// 1 is the royal flush, 7462 the worst high card. Ranks are directly
/// comparable across hands; equal ranks mean a chopped pot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(u16);

impl HandRank {
    pub const BEST: Self = Self(1);
    pub const WORST: Self = Self(7462);
    /// number of distinct 5-card hand values
    pub const COUNT: u16 = 7462;
}

impl From<u16> for HandRank {
    fn from(n: u16) -> Self {
        assert!(n >= 1 && n <= Self::COUNT, "rank out of range: {}", n);
        Self(n)
    }
}
impl From<HandRank> for u16 {
    fn from(r: HandRank) -> Self {
        r.0
    }
}
impl From<HandRank> for crate::Utility {
    fn from(r: HandRank) -> Self {
        r.0 as crate::Utility
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<13} {:>4}", Ranking::from(*self), self.0)
    }
}

/// The category a HandRank falls in. Category blocks partition 1..=7462,
/// strongest block first, so classification is a range check.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ranking {
    StraightFlush,
    FourOAK,
    FullHouse,
    Flush,
    Straight,
    ThreeOAK,
    TwoPair,
    OnePair,
    HighCard,
}

impl From<HandRank> for Ranking {
    fn from(r: HandRank) -> Self {
        match u16::from(r) {
            1..=10 => Ranking::StraightFlush,
            11..=166 => Ranking::FourOAK,
            167..=322 => Ranking::FullHouse,
            323..=1599 => Ranking::Flush,
            1600..=1609 => Ranking::Straight,
            1610..=2467 => Ranking::ThreeOAK,
            2468..=3325 => Ranking::TwoPair,
            3326..=6185 => Ranking::OnePair,
            6186..=7462 => Ranking::HighCard,
            n => panic!("rank out of range: {}", n),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::StraightFlush => write!(f, "StraightFlush"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::HighCard => write!(f, "HighCard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ranges_partition() {
        let mut last = Ranking::StraightFlush;
        for n in 1..=HandRank::COUNT {
            let next = Ranking::from(HandRank::from(n));
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn boundary_categories() {
        assert_eq!(Ranking::from(HandRank::BEST), Ranking::StraightFlush);
        assert_eq!(Ranking::from(HandRank::from(11)), Ranking::FourOAK);
        assert_eq!(Ranking::from(HandRank::from(1609)), Ranking::Straight);
        assert_eq!(Ranking::from(HandRank::WORST), Ranking::HighCard);
    }
}
