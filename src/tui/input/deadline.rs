use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::deadline::{format_deadline, parse_deadline, set_deadline, validate_deadline};
use crate::tui::app::{App, DeadlineTarget, Mode};

/// Keys while a date picker is open.
///
/// The picker is a masked `dd-mm-yyyy` field. Enter resolves it: a valid
/// future date is applied to the target slot, anything else is dropped.
/// Either way the picker closes; rejection is never surfaced.
pub(super) fn handle_deadline(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if app.picker_input.len() < 10 {
                // separators appear as soon as a segment fills
                if app.picker_input.len() == 2 || app.picker_input.len() == 5 {
                    app.picker_input.push('-');
                }
                app.picker_input.push(c);
            }
        }
        KeyCode::Backspace => {
            app.picker_input.pop();
            if app.picker_input.ends_with('-') {
                app.picker_input.pop();
            }
        }
        KeyCode::Enter => {
            resolve_picker(app);
        }
        KeyCode::Esc => {
            close_picker(app);
        }
        _ => {}
    }
}

/// Apply the picker outcome to its slot, then close it
fn resolve_picker(app: &mut App) {
    let Some(target) = app.picker else {
        app.mode = Mode::Navigate;
        return;
    };

    let date = parse_deadline(&app.picker_input).ok();
    match target {
        DeadlineTarget::NewTask => {
            // only a valid future date replaces the pending label
            if let Some(date) = date
                && validate_deadline(date).is_ok()
            {
                app.pending_deadline = format_deadline(date);
            }
        }
        DeadlineTarget::Task(id) => {
            if let Some(date) = date {
                if set_deadline(&mut app.tasks, id, date).is_ok() {
                    app.save();
                }
            }
        }
    }
    close_picker(app);
}

/// Close without applying; the input row keeps focus when the picker was
/// opened from it
fn close_picker(app: &mut App) {
    let was_new_task = app.picker == Some(DeadlineTarget::NewTask);
    app.picker = None;
    app.picker_input.clear();
    app.mode = if was_new_task { Mode::Input } else { Mode::Navigate };
}
