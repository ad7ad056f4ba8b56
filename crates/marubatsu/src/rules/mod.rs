//! Game rules for tic-tac-toe.

mod win;

pub use win::check_winner;
