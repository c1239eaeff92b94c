use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    forms::{AccountField, AccountForm, TransactionField, TransactionForm},
    ui::{components::card::Card, theme::Theme},
};

pub fn render_account_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &AccountForm,
    focused: bool,
    theme: &Theme,
) {
    let inner = Card::new("New account", theme)
        .focused(focused)
        .render_frame(frame, area);
    let rows = rows(inner, 3);

    render_field(
        frame,
        rows[0],
        "Name",
        &form.name,
        focused && form.focus == AccountField::Name,
        theme,
    );
    render_field(
        frame,
        rows[1],
        "Type",
        form.kind.label(),
        focused && form.focus == AccountField::Kind,
        theme,
    );
    render_message(frame, rows[2], form.message.as_deref(), theme);
}

pub fn render_transaction_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &TransactionForm,
    account_name: Option<&str>,
    focused: bool,
    theme: &Theme,
) {
    let title = match account_name {
        Some(name) => format!("New transaction · {name}"),
        None => "New transaction".to_string(),
    };
    let inner = Card::new(&title, theme)
        .focused(focused)
        .render_frame(frame, area);
    let rows = rows(inner, 4);

    render_field(
        frame,
        rows[0],
        "Description",
        &form.description,
        focused && form.focus == TransactionField::Description,
        theme,
    );
    render_field(
        frame,
        rows[1],
        "Amount",
        &form.amount,
        focused && form.focus == TransactionField::Amount,
        theme,
    );
    render_field(
        frame,
        rows[2],
        "Type",
        form.kind.label(),
        focused && form.focus == TransactionField::Kind,
        theme,
    );
    let hint = if account_name.is_none() {
        Some("Select an account first.")
    } else {
        form.message.as_deref()
    };
    render_message(frame, rows[3], hint, theme);
}

fn rows(area: Rect, count: usize) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); count])
        .split(area)
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let line = Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame<'_>, area: Rect, message: Option<&str>, theme: &Theme) {
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(theme.error))),
            area,
        );
    }
}
