pub mod game;
pub use game::*;

pub mod seat;
pub use seat::*;
