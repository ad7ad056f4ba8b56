//! Stateless rendering: every frame is a pure function of the app state.

mod board;
mod history;

use marubatsu::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Screen regions drawn by the last frame, for mouse hit-testing.
///
/// Rendering decides where cells and history rows land; the event
/// handler only asks which region a click fell into and forwards the
/// cell or step to the game. No legality checks happen here.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Rectangle of each rendered board cell.
    pub cells: Vec<(Rect, Position)>,
    /// Rectangle of each rendered history row, with its step index.
    pub history_rows: Vec<(Rect, usize)>,
}

impl HitMap {
    /// The board cell under the given screen coordinates, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, pos)| *pos)
    }

    /// The history step under the given screen coordinates, if any.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.history_rows
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, step)| *step)
    }
}

/// Draws one frame and reports where the interactive regions landed.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board + game info
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

    let title = Paragraph::new("marubatsu")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let game_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    board::render_board(frame, game_row[0], app, &mut hits);
    history::render_info(frame, game_row[1], app.game(), &mut hits);

    let help = Paragraph::new(
        "arrows/click: move  enter/1-9: place  [ ]: history  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    hits
}
