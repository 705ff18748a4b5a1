use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // a pending notice takes the whole row
    if let Some(ref msg) = app.status_message {
        let line = Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.alert).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    if !app.show_key_hints {
        let line = Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let hint = match app.mode {
        Mode::Navigate => "a add  space toggle  e edit  t deadline  d delete  ? help  q quit",
        Mode::Input => "Enter add  Tab deadline  Esc back",
        Mode::Edit => "Enter save  Esc cancel",
        Mode::Deadline => "Enter apply  Esc cancel",
    };

    let mut spans = Vec::new();
    let hint_width = hint.chars().count();
    if hint_width < width {
        let padding = width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        hint.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
