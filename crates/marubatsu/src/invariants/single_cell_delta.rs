//! Single-cell delta invariant: each move changes exactly one square.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;

/// Invariant: Adjacent history snapshots differ in exactly one square,
/// and that square goes from empty to occupied.
///
/// Moves only ever add a mark to a copy of the previous snapshot, so no
/// step can clear, move, or overwrite an existing mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let deltas: Vec<_> = Position::ALL
                .iter()
                .filter(|pos| pair[0].get(**pos) != pair[1].get(**pos))
                .collect();
            deltas.len() == 1
                && pair[0].get(*deltas[0]) == Square::Empty
                && pair[1].get(*deltas[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ in exactly one square, empty to occupied"
    }
}
