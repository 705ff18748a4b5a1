use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, DeadlineTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // --- list navigation ---
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }

        // --- mutations on the task under the cursor ---
        KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_task_id() {
                let _ = task_ops::toggle_task(&mut app.tasks, id);
                app.save();
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                task_ops::delete_task(&mut app.tasks, id);
                app.clamp_cursor();
                app.save();
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id() {
                let text = app.tasks.get(id).map(|t| t.text.clone()).unwrap_or_default();
                app.editing = Some(id);
                app.edit_cursor = text.len();
                app.edit_buffer = text;
                app.mode = Mode::Edit;
            }
        }
        KeyCode::Char('t') => {
            // open the deadline picker for this task (one open at a time)
            if let Some(id) = app.cursor_task_id() {
                app.picker = Some(DeadlineTarget::Task(id));
                app.picker_input.clear();
                app.mode = Mode::Deadline;
            }
        }

        // --- focus the new-task input row ---
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Input;
        }

        _ => {}
    }
}
