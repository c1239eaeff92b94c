use engine::Summary;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
};

use crate::{
    app::{Focus, UiState},
    client::BudgetApi,
    state::BudgetState,
    ui::{
        components::{
            accounts::{self, AccountsView},
            card::StatCard,
            forms, transactions,
            money::{outflow_amount, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render<A: BudgetApi>(
    frame: &mut Frame<'_>,
    area: Rect,
    budget: &BudgetState<A>,
    ui: &UiState,
    theme: &Theme,
) {
    // Left: accounts and the two forms. Right: summary and the list.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(6), // Transaction form
            Constraint::Length(5), // Account form
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    let view = AccountsView {
        accounts: budget.accounts(),
        selected_id: budget.selected_account_id(),
        highlighted: ui.highlighted,
        focused: ui.focus == Focus::Accounts && ui.upload.is_none(),
        currency: ui.currency,
    };
    accounts::render(frame, left[0], &view, theme);

    forms::render_transaction_form(
        frame,
        left[1],
        &ui.transaction_form,
        budget.selected_account().map(|account| account.name.as_str()),
        ui.focus == Focus::TransactionForm,
        theme,
    );
    forms::render_account_form(
        frame,
        left[2],
        &ui.account_form,
        ui.focus == Focus::AccountForm,
        theme,
    );

    render_summary(frame, right[0], budget.summary(), ui, theme);
    transactions::render(frame, right[1], &budget.page(), ui.currency, theme);
}

fn render_summary(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: Option<Summary>,
    ui: &UiState,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let Some(summary) = summary else {
        let dim = |text: &'static str| Span::styled(text, Style::default().fg(theme.dim));
        StatCard::new("Income", dim("-"), theme).render(frame, cols[0]);
        StatCard::new("Expenses", dim("-"), theme).render(frame, cols[1]);
        StatCard::new("Balance", dim("select an account"), theme).render(frame, cols[2]);
        return;
    };

    let expenses = outflow_amount(summary.expenses, ui.currency, theme);
    StatCard::new("Income", styled_amount(summary.income, ui.currency, theme), theme)
        .render(frame, cols[0]);
    StatCard::new("Expenses", expenses, theme).render(frame, cols[1]);
    StatCard::new("Balance", styled_amount(summary.balance, ui.currency, theme), theme)
        .render(frame, cols[2]);
}
