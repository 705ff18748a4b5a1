use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("a / i", "focus the input row"),
    ("Enter", "add task / save edit"),
    ("Tab", "deadline for the new task"),
    ("j / k", "move cursor"),
    ("space", "toggle done"),
    ("e", "edit task text"),
    ("t", "set task deadline"),
    ("d", "delete task"),
    ("Esc", "back / cancel"),
    ("q", "quit"),
];

/// Render the key binding overlay
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width: u16 = 42;
    let height = BINDINGS.len() as u16 + 2;
    if area.width < width || area.height < height {
        return;
    }
    let popup = Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .style(Style::default().bg(app.theme.background).fg(app.theme.text));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<8}", key),
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(app.theme.background),
                ),
                Span::styled(
                    what.to_string(),
                    Style::default().fg(app.theme.text).bg(app.theme.background),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
