use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DeadlineTarget};

const MASK: &str = "dd-mm-yyyy";

/// Render the date picker popup over the main layout
pub fn render_date_picker(frame: &mut Frame, app: &App, area: Rect) {
    let width: u16 = 26;
    let height: u16 = 4;
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

    let title = match app.picker {
        Some(DeadlineTarget::NewTask) => " deadline for new task ",
        _ => " deadline ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.highlight),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // typed digits over the rest of the mask: `31-0▌-yyyy`
    let typed = &app.picker_input;
    let rest = &MASK[typed.len().min(MASK.len())..];
    let entry = Line::from(vec![
        Span::styled(" ", Style::default().bg(app.theme.background)),
        Span::styled(
            typed.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        ),
        Span::styled(
            "\u{258C}",
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background),
        ),
        Span::styled(
            rest.to_string(),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ),
    ]);
    let hint = Line::from(Span::styled(
        " Enter apply  Esc cancel",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));

    frame.render_widget(
        Paragraph::new(vec![entry, hint]).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
