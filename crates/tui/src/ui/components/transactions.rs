use engine::{Currency, Page, display_date};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::ui::{
    components::{
        card::Card,
        money::{direction_marker, styled_amount},
    },
    theme::Theme,
};

/// One page of the transaction list with a page indicator in the title.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    page: &Page<'_>,
    currency: Currency,
    theme: &Theme,
) {
    let title = format!(
        "Transactions · page {} of {}",
        page.current_page, page.total_pages
    );
    let inner = Card::new(&title, theme).render_frame(frame, area);

    if page.items.is_empty() {
        frame.render_widget(
            Span::styled("No transactions yet.", Style::default().fg(theme.dim)),
            inner,
        );
        return;
    }

    let rows = page.items.iter().map(|tx| {
        Row::new(vec![
            Cell::from(direction_marker(engine::direction(tx), theme)),
            Cell::from(display_date(&tx.date)),
            Cell::from(tx.description.clone()),
            Cell::from(Span::styled(tx.kind.label(), Style::default().fg(theme.dim))),
            Cell::from(styled_amount(tx.amount, currency, theme)),
        ])
    });

    let header = Row::new(vec!["", "Date", "Description", "Type", "Amount"])
        .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(11),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header);
    frame.render_widget(table, inner);
}
