use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// One of the 169 strength-equivalent classes of two-card starting hands.
/// A class forgets concrete suits and keeps rank pair plus suitedness.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Class {
    hi: Rank,
    lo: Rank,
    suited: bool,
}

impl From<Hole> for Class {
    fn from(hole: Hole) -> Self {
        let (a, b) = hole.cards();
        let hi = std::cmp::max(a.rank(), b.rank());
        let lo = std::cmp::min(a.rank(), b.rank());
        Self {
            hi,
            lo,
            suited: hole.suited(),
        }
    }
}

impl From<(Rank, Rank, bool)> for Class {
    fn from((a, b, suited): (Rank, Rank, bool)) -> Self {
        assert!(!(suited && a == b), "pairs cannot be suited");
        Self {
            hi: std::cmp::max(a, b),
            lo: std::cmp::min(a, b),
            suited,
        }
    }
}

impl Class {
    pub fn pair(&self) -> bool {
        self.hi == self.lo
    }

    /// all 169 classes: 13 pairs, 78 suited, 78 offsuit
    pub fn exhaust() -> Vec<Self> {
        let mut classes = Vec::with_capacity(169);
        for hi in (0..13u8).rev().map(Rank::from) {
            for lo in (0..=u8::from(hi)).rev().map(Rank::from) {
                if hi == lo {
                    classes.push(Self::from((hi, lo, false)));
                } else {
                    classes.push(Self::from((hi, lo, true)));
                    classes.push(Self::from((hi, lo, false)));
                }
            }
        }
        classes
    }

    /// every concrete two-card combination consistent with this class,
    /// enumerated over ordered suit pairs the way the generator does:
    /// 12 for pairs, 4 for suited, 12 for offsuit
    pub fn combos(&self) -> Vec<Hole> {
        let mut holes = Vec::new();
        for s1 in Suit::all() {
            for s2 in Suit::all() {
                let ok = match (self.pair(), self.suited) {
                    (true, _) => s1 != s2,
                    (false, true) => s1 == s2,
                    (false, false) => s1 != s2,
                };
                if ok {
                    let a = Card::from((self.hi, *s1));
                    let b = Card::from((self.lo, *s2));
                    holes.push(Hole::from((a, b)));
                }
            }
        }
        holes
    }

    /// generation-side key, with offsuit written explicitly: "AKo"
    pub fn tag(&self) -> String {
        if !self.pair() && !self.suited {
            format!("{}{}o", self.hi, self.lo)
        } else {
            self.to_string()
        }
    }
}

/// lookup key: "AA", "AKs", "AK" — offsuit hands carry no suffix
impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)?;
        if self.suited {
            write!(f, "s")?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Class {
    fn random() -> Self {
        use crate::Arbitrary;
        Self::from(Hole::random())
    }
}
