//! Board grid rendering.

use marubatsu::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::HitMap;
use crate::app::App;

/// Renders the 3x3 grid, centered in `area`, and records cell rectangles.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(frame, rows[0], app, 0, hits);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], app, 1, hits);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], app, 2, hits);
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, row: usize, hits: &mut HitMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        // Every other chunk is a separator column.
        let pos = Position::from_row_col(row, col).expect("row and col are in range");
        render_cell(frame, cols[col * 2], app, pos, hits);
        if col < 2 {
            render_vertical_sep(frame, cols[col * 2 + 1]);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, hits: &mut HitMap) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
    hits.cells.push((area, pos));
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
