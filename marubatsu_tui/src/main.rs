//! Terminal UI for marubatsu.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use app::App;
use ui::HitMap;

/// Tic-tac-toe in the terminal, with a move history you can jump around in.
#[derive(Parser, Debug)]
#[command(name = "marubatsu_tui")]
#[command(version)]
struct Cli {
    /// Log file path. Logs go to a file so they never corrupt the UI;
    /// filter with RUST_LOG as usual.
    #[arg(long, default_value = "marubatsu_tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging to a file keeps the alternate screen clean.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting marubatsu TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Draw/poll loop. Every state transition runs to completion inside the
/// handler for one input event before the next event is read.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, &hits);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
