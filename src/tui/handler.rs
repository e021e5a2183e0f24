//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Loaded { ticket, result } => {
            app.apply_load(ticket, result);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => app.select_all(),
            KeyCode::Char('d') => app.deselect_all(),
            KeyCode::Char('c') => app.quit(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => match app.focused_panel {
            FocusedPanel::Filters => handle_filters_key(app, key),
            FocusedPanel::Table => handle_table_key(app, key),
        },
    }

    Ok(())
}

/// Handle keys when the project filters are focused
fn handle_filters_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char(' ') | KeyCode::Enter = key.code {
        app.toggle_selected_project();
    }
}

/// Handle keys when the table is focused
fn handle_table_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.open_bucket_detail();
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_dialog()
        }
        _ => {}
    }
    Ok(())
}
