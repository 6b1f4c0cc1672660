//! TUI module for draftdesk
//!
//! Interactive form interface using ratatui.

mod app;
pub mod screens;
pub mod widgets;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use crate::config::Settings;
use crate::llm::build_generator;
pub use app::{App, AppMode};

/// Run the TUI application
pub async fn run(settings: &Settings) -> Result<()> {
    // A missing key stops us before the terminal is taken over.
    settings.require_api_key()?;
    let generator = build_generator(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(settings, generator);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| app.draw(f))?;

        // A submission blocks input until the service answers.
        if app.is_pending() {
            app.complete_pending().await;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            if app.should_quit() {
                                return Ok(());
                            }
                            app.handle_back();
                        }
                        KeyCode::F(1) => {
                            app.toggle_help();
                        }
                        _ => {
                            app.handle_key_event(key);
                        }
                    }
                }
            }
        }
    }
}
