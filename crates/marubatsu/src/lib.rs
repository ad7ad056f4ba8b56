//! Tic-tac-toe game logic with move-history time travel.
//!
//! The crate is UI-agnostic: it models the board, detects wins, and keeps
//! an append-only history of board snapshots that a front end can jump
//! around in. All legality decisions live here; renderers stay pure.
//!
//! # Example
//!
//! ```
//! use marubatsu::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.place(Position::TopLeft).unwrap();
//! game.place(Position::Center).unwrap();
//! assert_eq!(game.next_player(), Player::X);
//! assert_eq!(game.history().len(), 3);
//!
//! // Time travel: revisit the position after the first move.
//! game.jump_to(1);
//! assert_eq!(game.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{Game, MoveError};
pub use position::Position;
pub use types::{Board, Player, Square};
