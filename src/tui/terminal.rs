//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.
//! It also owns the main loop and the background loader.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::{mpsc, Arc};
use std::thread;

use crate::config::Settings;
use crate::services::{Dataset, LoadTicket};
use crate::source::ExpenseSource;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Fetch and build a dataset on a worker thread, delivering the result as
/// an [`Event::Loaded`]
fn spawn_load(source: Arc<dyn ExpenseSource>, ticket: LoadTicket, sender: mpsc::Sender<Event>) {
    thread::spawn(move || {
        tracing::debug!(generation = ticket.generation(), "loading dataset");
        let result = source.fetch().and_then(Dataset::build);
        // The receiver is gone once the app has quit
        let _ = sender.send(Event::Loaded { ticket, result });
    });
}

/// Run the TUI application
pub fn run_tui(settings: Settings, source: Arc<dyn ExpenseSource>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings, source.describe());
    let events = EventHandler::default();

    let outcome = run_loop(&mut terminal, &mut app, &events, &source);

    restore_terminal()?;
    outcome
}

fn run_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    source: &Arc<dyn ExpenseSource>,
) -> Result<()> {
    loop {
        if let Some(ticket) = app.take_reload_request() {
            spawn_load(Arc::clone(source), ticket, events.sender());
        }

        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
