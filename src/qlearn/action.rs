use colored::*;

/// An agent decision at one betting node. Fixed-limit heads-up collapses
/// the action space to three choices; checking and calling share an index
/// since exactly one of them is ever legal.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Fold = 0,
    CheckCall = 1,
    Raise = 2,
}

impl Action {
    pub const fn all() -> &'static [Self] {
        &[Self::Fold, Self::CheckCall, Self::Raise]
    }
}

/// u8 isomorphism
impl From<u8> for Action {
    fn from(n: u8) -> Self {
        match n {
            0 => Action::Fold,
            1 => Action::CheckCall,
            2 => Action::Raise,
            _ => panic!("Invalid action u8: {}", n),
        }
    }
}
impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action as u8
    }
}

/// Q-table column index
impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::CheckCall => write!(f, "{}", "CHECK/CALL".cyan()),
            Action::Raise => write!(f, "{}", "RAISE".green()),
        }
    }
}
