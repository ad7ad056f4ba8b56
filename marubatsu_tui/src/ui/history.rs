//! Status line and the jumpable move-history list.

use marubatsu::Game;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::HitMap;

/// Renders the game-info pane: status on top, history list below.
pub fn render_info(frame: &mut Frame, area: Rect, game: &Game, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = Paragraph::new(game.status())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    render_history_list(frame, chunks[1], game, hits);
}

/// One row per snapshot, current step highlighted, clickable.
///
/// Rows are drawn by hand instead of through a stateful `List` so that
/// each row's rectangle is known exactly for mouse hit-testing.
fn render_history_list(frame: &mut Frame, area: Rect, game: &Game, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let labels = game.move_labels();
    let visible = inner.height as usize;
    // Keep the current step in view once the list outgrows the pane.
    let start = game.step().saturating_sub(visible.saturating_sub(1));

    for (offset, step) in (start..labels.len()).take(visible).enumerate() {
        let row = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
        let style = if step == game.step() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        let marker = if step == game.step() { ">" } else { " " };
        let line = Paragraph::new(format!("{marker} {}", labels[step])).style(style);
        frame.render_widget(line, row);
        hits.history_rows.push((row, step));
    }
}
