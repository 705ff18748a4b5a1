use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::ops::deadline::parse_deadline;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list with cursor highlight, inline edit buffer, and
/// right-aligned deadlines (overdue ones in the alert color)
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;

    // keep the cursor visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let today = Local::now().date_naive();
    let mut lines: Vec<Line> = Vec::new();
    for (idx, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        lines.push(task_line(app, task, idx, area.width as usize, today));
    }

    if app.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "   nothing to do",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn task_line<'a>(
    app: &App,
    task: &Task,
    idx: usize,
    width: usize,
    today: chrono::NaiveDate,
) -> Line<'a> {
    let selected = idx == app.cursor && app.mode != Mode::Input;
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let checkbox = if task.completed { " [x] " } else { " [ ] " };
    let mut spans = vec![Span::styled(
        checkbox,
        Style::default()
            .fg(if task.completed {
                app.theme.dim
            } else {
                app.theme.text
            })
            .bg(bg),
    )];

    let being_edited = app.editing == Some(task.id);
    if being_edited {
        let cursor = app.edit_cursor.min(app.edit_buffer.len());
        let (before, after) = app.edit_buffer.split_at(cursor);
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else {
        let mut style = Style::default()
            .fg(if task.completed {
                app.theme.dim
            } else if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(bg);
        if task.completed {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        // leave room for checkbox + deadline column
        let budget = width.saturating_sub(checkbox.len() + 14);
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.text, budget),
            style,
        ));
    }

    // right-aligned deadline; the sentinel stays dim, real dates get the
    // deadline color and overdue ones the alert color
    let deadline_style = if !task.has_deadline() {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        match parse_deadline(&task.deadline) {
            Ok(date) if date < today => Style::default().fg(app.theme.alert).bg(bg),
            _ => Style::default().fg(app.theme.deadline).bg(bg),
        }
    };
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let deadline_width = unicode::display_width(&task.deadline) + 1;
    if content_width + deadline_width < width {
        let padding = width - content_width - deadline_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(task.deadline.clone(), deadline_style));
    }

    Line::from(spans)
}
