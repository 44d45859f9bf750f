use crate::Chips;

/// Chip bookkeeping for one player across a hand.
/// stake is the bet outstanding this street, spent the total pot
/// contribution; stakes zero out when the street advances.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    stack: Chips,
    stake: Chips,
    spent: Chips,
}

impl Seat {
    pub fn new(stack: Chips) -> Seat {
        Seat {
            stack,
            stake: 0,
            spent: 0,
        }
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }

    pub fn bet(&mut self, bet: Chips) {
        self.stack -= bet;
        self.stake += bet;
        self.spent += bet;
    }
    pub fn win(&mut self, win: Chips) {
        self.stack += win;
    }
    pub fn next_street(&mut self) {
        self.stake = 0;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>5} ({:>3} in)", self.stack, self.spent)
    }
}
