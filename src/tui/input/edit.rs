use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

use super::common;

/// Keys while editing an existing task's text.
///
/// Enter commits through the same validation as task creation; a rejected
/// commit keeps the edit session open so the user can fix the text. Esc
/// abandons the session without touching the task.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            confirm_edit(app);
        }
        KeyCode::Esc => {
            cancel_edit(app);
        }

        KeyCode::Char(c) => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::insert_char(buffer, cursor, c);
        }
        KeyCode::Backspace => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::backspace(buffer, cursor);
        }
        KeyCode::Delete => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::delete_forward(buffer, cursor);
        }
        KeyCode::Left => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_left(buffer, cursor);
        }
        KeyCode::Right => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_right(buffer, cursor);
        }
        KeyCode::Home => {
            let (_, cursor) = app.active_buffer_mut();
            common::move_home(cursor);
        }
        KeyCode::End => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_end(buffer, cursor);
        }
        _ => {}
    }
}

fn confirm_edit(app: &mut App) {
    let Some(id) = app.editing else {
        app.mode = Mode::Navigate;
        return;
    };

    let text = app.edit_buffer.clone();
    if task_ops::commit_edit(&mut app.tasks, id, &text).is_ok() {
        app.editing = None;
        app.edit_buffer.clear();
        app.edit_cursor = 0;
        app.mode = Mode::Navigate;
        app.save();
    }
    // rejected: stay in edit mode, buffer intact
}

fn cancel_edit(app: &mut App) {
    app.editing = None;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;
}
