//! Turn parity invariant: step index counts the marks on its snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: The snapshot at step `k` has exactly `k` occupied squares.
///
/// The next player is derived from the step pointer's parity rather than
/// stored, which is only sound if every step index matches the number of
/// moves its snapshot contains. With this invariant, jumping anywhere in
/// history always yields a consistent turn.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
            && game
                .history()
                .iter()
                .enumerate()
                .all(|(step, board)| board.occupied_count() == step)
    }

    fn description() -> &'static str {
        "Snapshot at step k has exactly k occupied squares"
    }
}
