use super::betting::BettingState;
use crate::Utility;
use crate::cards::ranking::HandRank;
use crate::cards::street::Street;

/// Discretizes (street, hand rank, betting situation) into an index over a
/// fixed-size state space of `4 * buckets * 4` entries. Injective for a
/// fixed bucket count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    buckets: usize,
}

impl Encoder {
    pub fn new(buckets: usize) -> Self {
        assert!(buckets > 0, "at least one bucket");
        Self { buckets }
    }

    /// total number of encodable states
    pub fn states(&self) -> usize {
        4 * self.buckets * 4
    }

    /// hand-strength bin, monotone non-decreasing in rank and saturating
    /// at the last bucket for ranks at or beyond the scale
    pub fn bucket(&self, rank: Utility) -> usize {
        let scaled = rank.max(0.0) / HandRank::COUNT as Utility;
        let bucket = (scaled * self.buckets as Utility) as usize;
        bucket.min(self.buckets - 1)
    }

    pub fn encode(&self, street: Street, rank: Utility, betting: BettingState) -> usize {
        let street = usize::from(street);
        let bucket = self.bucket(rank);
        let betting = usize::from(betting);
        street * self.buckets * 4 + bucket * 4 + betting
    }
}
