mod app;
mod domain;
mod filter;
mod input;
mod session;
mod store;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use ticker::Ticker;

#[derive(Parser)]
#[command(name = "taskdeck", version)]
#[command(about = "A terminal project and task tracker with per-task time tracking", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    run_tui()
}

fn run_tui() -> Result<()> {
    let mut app = AppState::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // State is session-only; nothing to save on exit
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    // The one tick source for the session; stops when this loop returns
    let mut tick = Ticker::new(ticker::tick_duration());

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events, waiting at most until the next tick is due
        if event::poll(tick.timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance stopwatches once per elapsed interval
        if tick.poll(Instant::now()) {
            app.tick(Local::now());
        }
    }
}
