use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    client::BudgetApi,
    state::BudgetState,
    ui::{centered_box, theme::Theme},
};

/// Shown when the accounts could not be loaded: offers an import instead.
pub fn render<A: BudgetApi>(
    frame: &mut Frame<'_>,
    area: Rect,
    budget: &BudgetState<A>,
    theme: &Theme,
) {
    let rect = centered_box(area.width.min(56), 9, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(" no data ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let mut lines = vec![
        Line::from(Span::styled(
            "No accounts to show.",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("u", Style::default().fg(theme.accent)),
            Span::raw(" to import a budget-data.json export"),
        ]),
        Line::from(vec![
            Span::raw("or "),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::raw(" to try the server again."),
        ]),
    ];
    if let Some(error) = budget.last_error() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme.error),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}
