use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::NO_DEADLINE;
use crate::tui::app::{App, Mode};

/// Render the new-task entry row: prompt, buffer (with cursor when
/// focused), and the pending deadline label on the right.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let focused = app.mode == Mode::Input;

    let mut spans = vec![Span::styled(
        " > ",
        Style::default()
            .fg(if focused {
                app.theme.highlight
            } else {
                app.theme.dim
            })
            .bg(bg),
    )];

    if app.input.is_empty() && !focused {
        spans.push(Span::styled(
            "press a to add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // split at the cursor so the cursor block sits mid-string
        let (before, after) = app.input.split_at(app.input_cursor.min(app.input.len()));
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    // pending deadline label, right-aligned
    let label = &app.pending_deadline;
    let label_style = if label == NO_DEADLINE {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.deadline).bg(bg)
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let label_width = label.chars().count() + 1;
    if content_width + label_width < width {
        let padding = width - content_width - label_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(label.clone(), label_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn idle_row_shows_hint_and_sentinel() {
        let app = test_app_with(&[]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("press a to add a task"));
        assert!(output.contains(NO_DEADLINE));
    }

    #[test]
    fn focused_row_shows_buffer_and_cursor() {
        let mut app = test_app_with(&[]);
        app.mode = Mode::Input;
        app.input = "Buy milk".to_string();
        app.input_cursor = 3;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("Buy\u{258C} milk"));
    }

    #[test]
    fn pending_date_replaces_sentinel() {
        let mut app = test_app_with(&[]);
        app.pending_deadline = "24-10-2099".to_string();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("24-10-2099"));
        assert!(!output.contains(NO_DEADLINE));
    }
}
