use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::UploadPrompt,
    ui::{centered_box, theme::Theme},
};

/// Modal asking for the path of a previously exported `.json` file.
pub fn render(frame: &mut Frame<'_>, area: Rect, prompt: &UploadPrompt, theme: &Theme) {
    let rect = centered_box(area.width.min(60), 5, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(" import ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Path to a .json export",
            Style::default().fg(theme.dim),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prompt.path.as_str(), Style::default().fg(theme.text)),
            Span::styled("│", Style::default().fg(theme.accent)),
        ])),
        rows[2],
    );
}
