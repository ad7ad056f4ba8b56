//! Application state and event handling.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use marubatsu::{Game, Position};
use tracing::debug;

use crate::input;
use crate::ui::HitMap;

/// Main application state.
///
/// The app owns the game and a keyboard cursor. All legality decisions
/// live in [`Game`]; rejected moves are discarded here without any
/// feedback, so an invalid click or keypress is simply a no-op.
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                debug!("Restarting game");
                self.game.restart();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.place(pos);
                }
            }
            KeyCode::Char('[') => {
                self.game.jump_to(self.game.step().saturating_sub(1));
            }
            KeyCode::Char(']') => {
                self.game.jump_to(self.game.step() + 1);
            }
            KeyCode::Home => self.game.jump_to(0),
            KeyCode::End => self.game.jump_to(self.game.history().len() - 1),
            _ => {}
        }
    }

    /// Handles a mouse event against the rectangles the last frame drew.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, hits: &HitMap) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = hits.cell_at(mouse.column, mouse.row) {
            self.cursor = pos;
            self.place(pos);
        } else if let Some(step) = hits.history_row_at(mouse.column, mouse.row) {
            debug!(step, "Jumping to history entry");
            self.game.jump_to(step);
        }
    }

    fn place(&mut self, pos: Position) {
        // Occupied squares and finished games are silent no-ops.
        if let Err(err) = self.game.place(pos) {
            debug!(position = %pos, %err, "Move ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use marubatsu::{Player, Square};
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_key_places_mark() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_repeated_key_on_same_square_is_noop() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 2);

        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().step(), 1);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().step(), 0);
        // Already at the root; another step back stays put.
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().step(), 0);

        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().step(), 1);
        app.handle_key(KeyCode::End);
        assert_eq!(app.game().step(), 2);
        // Past the latest snapshot; ignored.
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().step(), 2);
    }

    #[test]
    fn test_restart_key() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().next_player(), Player::X);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_click_places_on_cell() {
        let mut app = App::new();
        let mut hits = HitMap::default();
        hits.cells
            .push((Rect::new(10, 5, 4, 3), Position::BottomRight));

        app.handle_mouse(click(11, 6), &hits);
        assert_eq!(
            app.game().board().get(Position::BottomRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_mouse_click_on_history_row_jumps() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        let mut hits = HitMap::default();
        hits.history_rows.push((Rect::new(40, 8, 20, 1), 1));
        app.handle_mouse(click(45, 8), &hits);
        assert_eq!(app.game().step(), 1);
        // History survives the jump.
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_mouse_click_outside_any_region_is_noop() {
        let mut app = App::new();
        let hits = HitMap::default();
        app.handle_mouse(click(0, 0), &hits);
        assert_eq!(app.game().history().len(), 1);
    }
}
