//! Seeded root invariant: history starts with the empty board.

use super::Invariant;
use crate::game::Game;

/// Invariant: History is never empty and its first snapshot is the
/// all-empty board.
///
/// Every game, including one reset mid-play, is anchored at step 0 on
/// the empty board, so jumping to step 0 always shows a blank grid.
pub struct SeededRootInvariant;

impl Invariant<Game> for SeededRootInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .first()
            .is_some_and(|board| board.occupied_count() == 0)
    }

    fn description() -> &'static str {
        "History starts with a single all-empty snapshot"
    }
}
