use super::rank::Rank;
use super::ranking::HandRank;
use std::collections::HashMap;
use std::sync::LazyLock;

/// tables are indexed by a 13-bit rank pattern; the largest 5-bit pattern is
/// 0b1111100000000 = 7936
const SIZE: usize = 7937;
/// number of 5-rank patterns with five distinct ranks, C(13,5)
const N_UNIQUE: usize = 1287;
/// number of 5-rank multisets with a repeated rank
const N_PAIRED: usize = 4888;

/// first rank of each category block, strongest block first
const STRAIGHT_FLUSH: u16 = 1;
const FOUR_OAK: u16 = 11;
const FULL_HOUSE: u16 = 167;
const FLUSH: u16 = 323;
const STRAIGHT: u16 = 1600;
const THREE_OAK: u16 = 1610;
const TWO_PAIR: u16 = 2468;
const ONE_PAIR: u16 = 3326;
const HIGH_CARD: u16 = 6186;

static LOOKUP: LazyLock<Lookup> = LazyLock::new(Lookup::build);

/// Startup-built lookup tables covering all 7462 distinct 5-card values.
///
/// Within a category, hands are enumerated strongest first: descending by
/// defining rank(s), then descending by kickers. Walking every category in
/// strength order and handing out ranks sequentially reproduces the
/// canonical 1..=7462 scale; the block boundaries are asserted as each
/// category is exhausted.
pub struct Lookup {
    flushes: Vec<u16>,
    unique5: Vec<u16>,
    products: HashMap<u32, u16>,
}

impl Lookup {
    pub fn instance() -> &'static Self {
        &LOOKUP
    }

    /// rank of five suited cards with this rank pattern
    pub fn flush(&self, q: u16) -> HandRank {
        HandRank::from(self.flushes[q as usize])
    }
    /// rank of five unsuited distinct ranks, if the pattern has five bits
    pub fn unique(&self, q: u16) -> Option<HandRank> {
        match self.unique5[q as usize] {
            0 => None,
            n => Some(HandRank::from(n)),
        }
    }
    /// rank of a paired/tripled/quadded hand keyed by its prime product
    pub fn paired(&self, product: u32) -> Option<HandRank> {
        self.products.get(&product).copied().map(HandRank::from)
    }

    /// the ten straight patterns, strongest first, wheel last
    fn straights() -> Vec<u16> {
        let mut straights = (4..=12u8)
            .rev()
            .map(|hi| 0b11111 << (hi - 4))
            .collect::<Vec<u16>>();
        straights.push(0b1000000001111);
        straights
    }

    fn build() -> Self {
        let mut flushes = vec![0u16; SIZE];
        let mut unique5 = vec![0u16; SIZE];
        let mut products = HashMap::with_capacity(N_PAIRED);
        let straights = Self::straights();
        for (i, &q) in straights.iter().enumerate() {
            flushes[q as usize] = STRAIGHT_FLUSH + i as u16;
            unique5[q as usize] = STRAIGHT + i as u16;
        }
        let mut patterns = (0..SIZE as u16)
            .filter(|q| q.count_ones() == 5)
            .collect::<Vec<u16>>();
        patterns.sort_unstable_by(|a, b| b.cmp(a));
        let mut flush = FLUSH;
        let mut high = HIGH_CARD;
        for q in patterns.into_iter().filter(|q| !straights.contains(q)) {
            flushes[q as usize] = flush;
            unique5[q as usize] = high;
            flush += 1;
            high += 1;
        }
        assert!(flush == STRAIGHT);
        assert!(high == HandRank::COUNT + 1);
        let p = |i: u8| Rank::from(i).prime();
        let mut rank = FOUR_OAK;
        for quad in (0..13u8).rev() {
            for kick in (0..13u8).rev().filter(|&k| k != quad) {
                products.insert(p(quad).pow(4) * p(kick), rank);
                rank += 1;
            }
        }
        assert!(rank == FULL_HOUSE);
        for trip in (0..13u8).rev() {
            for pair in (0..13u8).rev().filter(|&k| k != trip) {
                products.insert(p(trip).pow(3) * p(pair).pow(2), rank);
                rank += 1;
            }
        }
        assert!(rank == FLUSH);
        rank = THREE_OAK;
        for trip in (0..13u8).rev() {
            for hi in (0..13u8).rev().filter(|&k| k != trip) {
                for lo in (0..hi).rev().filter(|&k| k != trip) {
                    products.insert(p(trip).pow(3) * p(hi) * p(lo), rank);
                    rank += 1;
                }
            }
        }
        assert!(rank == TWO_PAIR);
        for hi in (0..13u8).rev() {
            for lo in (0..hi).rev() {
                for kick in (0..13u8).rev().filter(|&k| k != hi && k != lo) {
                    products.insert(p(hi).pow(2) * p(lo).pow(2) * p(kick), rank);
                    rank += 1;
                }
            }
        }
        assert!(rank == ONE_PAIR);
        for pair in (0..13u8).rev() {
            for a in (0..13u8).rev().filter(|&k| k != pair) {
                for b in (0..a).rev().filter(|&k| k != pair) {
                    for c in (0..b).rev().filter(|&k| k != pair) {
                        products.insert(p(pair).pow(2) * p(a) * p(b) * p(c), rank);
                        rank += 1;
                    }
                }
            }
        }
        assert!(rank == HIGH_CARD);
        assert!(products.len() == N_PAIRED);
        Self {
            flushes,
            unique5,
            products,
        }
    }
}
