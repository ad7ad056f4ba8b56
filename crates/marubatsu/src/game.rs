//! Game controller: snapshot history, step pointer, and transitions.

use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when placing a mark.
///
/// Front ends that want silent no-op semantics simply discard the error;
/// the game state is untouched either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game with move-history time travel.
///
/// The game keeps every board the match has passed through as an
/// immutable snapshot, starting from the empty board. A step pointer
/// selects which snapshot is current; jumping to an earlier step keeps
/// the later snapshots around until a new move is placed from there,
/// which discards the abandoned tail first.
///
/// Whose turn it is falls out of the step pointer's parity (even step,
/// X to move), so it can never drift from the selected snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game: one empty snapshot, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// The board at the step pointer.
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The player who moves next from the current snapshot.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.board())
    }

    /// Places the next player's mark at the given position.
    ///
    /// Discards any snapshots after the step pointer, copies the current
    /// board, marks the square, and appends the result as the new latest
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the current snapshot already
    /// has a winner, or [`MoveError::SquareOccupied`] if the square is
    /// taken. The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        self.history.truncate(self.step + 1);
        self.history.push(board);
        self.step = self.history.len() - 1;

        debug!(position = %pos, step = self.step, "Mark placed");
        Ok(())
    }

    /// Moves the step pointer to a recorded snapshot.
    ///
    /// Later snapshots are kept; only a subsequent [`place`](Self::place)
    /// discards them. Out-of-range steps are silently ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step < self.history.len() {
            self.step = step;
        }
    }

    /// Resets to a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// One-line status for display.
    ///
    /// `"Winner: X"` when the current snapshot has a winner, otherwise
    /// `"Next player: O"`. A full board with no winner still reads as
    /// "Next player" — the original game never displayed a draw, and
    /// that behavior is kept.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(player) => format!("Winner: {player}"),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// One label per history entry, `"History {n}: {compact board}"`.
    ///
    /// Numbering starts at 1 for the empty board.
    pub fn move_labels(&self) -> Vec<String> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, board)| format!("History {}: {}", step + 1, board.compact()))
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), "Next player: X");
    }

    #[test]
    fn test_place_alternates_players() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        assert_eq!(game.next_player(), Player::O);
        game.place(Position::Center).unwrap();
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(
            game.board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_place_on_occupied_square_is_rejected() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_place_after_win_is_rejected() {
        let mut game = Game::new();
        // X: top row, O: middle row.
        game.place(Position::TopLeft).unwrap();
        game.place(Position::MiddleLeft).unwrap();
        game.place(Position::TopCenter).unwrap();
        game.place(Position::Center).unwrap();
        game.place(Position::TopRight).unwrap();
        assert_eq!(game.winner(), Some(Player::X));

        let before = game.clone();
        assert_eq!(game.place(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_recomputes_turn_from_parity() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.place(Position::Center).unwrap();
        game.place(Position::TopCenter).unwrap();

        game.jump_to(1);
        assert_eq!(game.step(), 1);
        assert_eq!(game.next_player(), Player::O);
        // History is untouched by the jump.
        assert_eq!(game.history().len(), 4);

        game.jump_to(2);
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.jump_to(5);
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_place_after_jump_truncates_tail() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.place(Position::Center).unwrap();
        game.place(Position::TopCenter).unwrap();
        assert_eq!(game.history().len(), 4);

        game.jump_to(1);
        game.place(Position::BottomRight).unwrap();

        // Snapshots 2 and 3 are gone; the new move sits at step 2.
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        assert_eq!(
            game.board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert!(game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.place(Position::Center).unwrap();
        game.restart();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_move_labels() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        assert_eq!(
            game.move_labels(),
            vec![
                "History 1: ---------".to_string(),
                "History 2: X--------".to_string(),
            ]
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.place(Position::Center).unwrap();
        game.jump_to(1);

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.step(), 1);
    }
}
