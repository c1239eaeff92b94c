use api_types::account::Account;
use engine::{Currency, format_currency};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::ui::{components::{card::Card, money::styled_amount}, theme::Theme};

pub struct AccountsView<'a> {
    pub accounts: &'a [Account],
    pub selected_id: Option<&'a str>,
    pub highlighted: usize,
    pub focused: bool,
    pub currency: Currency,
}

/// Accounts overview: net worth in the title, one row per account.
pub fn render(frame: &mut Frame<'_>, area: Rect, view: &AccountsView<'_>, theme: &Theme) {
    let total = engine::total_balance(view.accounts);
    let title = format!("Accounts · net worth {}", format_currency(total, view.currency));
    let inner = Card::new(&title, theme)
        .focused(view.focused)
        .render_frame(frame, area);

    let items: Vec<ListItem<'_>> = view
        .accounts
        .iter()
        .map(|account| {
            let selected = view.selected_id == Some(account.id.as_str());
            let marker = if selected { "● " } else { "  " };
            let name_style = if selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(account.name.clone(), name_style),
                Span::styled(
                    format!("  {}  ", account.kind.label()),
                    Style::default().fg(theme.dim),
                ),
                styled_amount(account.balance, view.currency, theme),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(theme.highlight));
    let mut state = ListState::default();
    if view.focused && !view.accounts.is_empty() {
        state.select(Some(view.highlighted.min(view.accounts.len() - 1)));
    }
    frame.render_stateful_widget(list, inner, &mut state);
}
