//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::services::ConfirmResponse;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::EditingTotal => handle_total_input_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Selection
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),

        // Slider movement
        KeyCode::Left | KeyCode::Char('h') => app.nudge_selected(false, coarse),
        KeyCode::Right | KeyCode::Char('l') => app.nudge_selected(true, coarse),
        KeyCode::Char('H') => app.nudge_selected(false, true),
        KeyCode::Char('L') => app.nudge_selected(true, true),
        KeyCode::Home => app.set_selected(crate::models::Amount::zero()),
        KeyCode::End => {
            let total = app.session.total_budget();
            app.set_selected(total);
        }

        // Actions
        KeyCode::Char('t') => app.start_editing_total(),
        KeyCode::Char('c') | KeyCode::Esc => app.request_cancel(),
        KeyCode::Char('a') | KeyCode::Enter => app.allot(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while editing the total budget
fn handle_total_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.apply_total_input(),
        KeyCode::Esc => app.finish_editing_total(),
        KeyCode::Backspace => app.total_input.backspace(),
        KeyCode::Delete => app.total_input.delete(),
        KeyCode::Left => app.total_input.move_left(),
        KeyCode::Right => app.total_input.move_right(),
        KeyCode::Home => app.total_input.move_start(),
        KeyCode::End => app.total_input.move_end(),
        KeyCode::Char(c) => {
            if !app.total_input.insert(c) {
                app.set_status("Digits only");
                return Ok(());
            }
        }
        _ => {}
    }

    app.clear_status();
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmCancel(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.resolve_cancel(ConfirmResponse::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => app.resolve_cancel(ConfirmResponse::No),
            KeyCode::Esc => app.resolve_cancel(ConfirmResponse::Dismissed),
            _ => {}
        },
        ActiveDialog::None => {}
    }

    Ok(())
}
