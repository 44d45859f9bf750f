use super::action::Action;
use crate::Chips;

/// Discrete classification of whose bet is unmatched in the current round,
/// derived from the two outstanding bet totals. The decision core consumes
/// the category, never the raw amounts.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum BettingState {
    /// nobody has put chips in yet this round
    Unopened = 0,
    /// we have an outstanding bet the opponent has not answered
    Leading = 1,
    /// both sides have matched; the round is closing
    Matched = 2,
    /// the opponent has an outstanding bet we have not matched
    Facing = 3,
}

/// derivation from (our bet, opponent bet) this round
impl From<(Chips, Chips)> for BettingState {
    fn from((mine, theirs): (Chips, Chips)) -> Self {
        if mine == 0 && theirs == 0 {
            Self::Unopened
        } else if mine == 0 && theirs > 0 {
            Self::Facing
        } else if mine > 0 && theirs == mine {
            Self::Matched
        } else {
            Self::Leading
        }
    }
}

/// state-index component
impl From<BettingState> for usize {
    fn from(state: BettingState) -> Self {
        state as usize
    }
}

impl BettingState {
    pub const fn all() -> &'static [Self] {
        &[Self::Unopened, Self::Leading, Self::Matched, Self::Facing]
    }

    /// the legal actions in this situation. folding is disallowed when
    /// nothing is owed; a capped round removes the raise. never empty,
    /// Matched in particular checks through rather than offering nothing.
    pub fn options(&self, raise_cap_reached: bool) -> Vec<Action> {
        match self {
            Self::Unopened | Self::Leading => vec![Action::CheckCall, Action::Raise],
            Self::Matched => vec![Action::CheckCall],
            Self::Facing if raise_cap_reached => vec![Action::Fold, Action::CheckCall],
            Self::Facing => vec![Action::Fold, Action::CheckCall, Action::Raise],
        }
    }
}

impl std::fmt::Display for BettingState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unopened => write!(f, "unopened"),
            Self::Leading => write!(f, "leading"),
            Self::Matched => write!(f, "matched"),
            Self::Facing => write!(f, "facing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_from_bets() {
        assert_eq!(BettingState::from((0, 0)), BettingState::Unopened);
        assert_eq!(BettingState::from((0, 2)), BettingState::Facing);
        assert_eq!(BettingState::from((2, 2)), BettingState::Matched);
        assert_eq!(BettingState::from((4, 2)), BettingState::Leading);
        assert_eq!(BettingState::from((2, 4)), BettingState::Leading);
    }

    #[test]
    fn options_never_empty() {
        for state in BettingState::all() {
            for capped in [false, true] {
                assert!(!state.options(capped).is_empty());
            }
        }
    }

    #[test]
    fn no_fold_when_nothing_owed() {
        assert!(!BettingState::Unopened.options(false).contains(&Action::Fold));
        assert!(!BettingState::Leading.options(false).contains(&Action::Fold));
        assert!(BettingState::Facing.options(false).contains(&Action::Fold));
    }

    #[test]
    fn raise_cap_binds_when_facing() {
        assert!(BettingState::Facing.options(false).contains(&Action::Raise));
        assert!(!BettingState::Facing.options(true).contains(&Action::Raise));
    }

    #[test]
    fn matched_checks_through() {
        assert_eq!(BettingState::Matched.options(false), vec![Action::CheckCall]);
        assert_eq!(BettingState::Matched.options(true), vec![Action::CheckCall]);
    }
}
