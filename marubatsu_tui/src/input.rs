//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use marubatsu::Position;

/// Moves the board cursor based on arrow keys, clamped at the grid edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
