pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{Focus, UiState},
    client::BudgetApi,
    state::{Availability, BudgetState},
};

use components::hints::{KeyHint, hint_separator, hints_to_spans};

pub use terminal::{AppTerminal as Terminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render<A: BudgetApi>(frame: &mut Frame<'_>, budget: &BudgetState<A>, ui: &UiState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_info_bar(frame, layout[0], budget, ui, &theme);
    match budget.availability() {
        Availability::Loading => render_loading(frame, layout[1], &theme),
        Availability::Empty => screens::empty::render(frame, layout[1], budget, &theme),
        Availability::Ready => screens::dashboard::render(frame, layout[1], budget, ui, &theme),
    }
    render_bottom_bar(frame, layout[2], budget.availability(), ui, &theme);

    if let Some(prompt) = &ui.upload {
        components::upload_prompt::render(frame, area, prompt, &theme);
    }
    components::toast::render(frame, area, ui.toast.as_ref(), &theme);
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let rect = centered_box(area.width, 1, area);
    let text = Paragraph::new(Span::styled("Loading...", Style::default().fg(theme.dim)))
        .alignment(Alignment::Center);
    frame.render_widget(text, rect);
}

fn render_info_bar<A: BudgetApi>(
    frame: &mut Frame<'_>,
    area: Rect,
    budget: &BudgetState<A>,
    ui: &UiState,
    theme: &Theme,
) {
    let refresh = budget
        .last_refresh()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let account = budget
        .selected_account()
        .map(|account| account.name.as_str())
        .unwrap_or("none");

    let mut spans = vec![
        Span::styled("API", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", ui.base_url)),
        Span::styled("Account", Style::default().fg(theme.dim)),
        Span::raw(format!(": {account}  ")),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}")),
    ];
    if budget.is_loading() {
        spans.push(Span::styled("  loading", Style::default().fg(theme.accent)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    availability: Availability,
    ui: &UiState,
    theme: &Theme,
) {
    let mut parts = hints_to_spans(&context_hints(availability, ui), theme);
    parts.push(hint_separator(theme));
    parts.extend(hints_to_spans(&[KeyHint::new("Ctrl+C", "quit")], theme));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn context_hints(availability: Availability, ui: &UiState) -> Vec<KeyHint> {
    if ui.upload.is_some() {
        return vec![KeyHint::new("Enter", "import"), KeyHint::new("Esc", "cancel")];
    }
    match availability {
        Availability::Loading => Vec::new(),
        Availability::Empty => vec![
            KeyHint::new("u", "import"),
            KeyHint::new("r", "retry"),
            KeyHint::new("q", "quit"),
        ],
        Availability::Ready => match ui.focus {
            Focus::Accounts => vec![
                KeyHint::new("↑↓", "account"),
                KeyHint::new("Enter", "select"),
                KeyHint::new("[ ]", "page"),
                KeyHint::new("t", "transaction"),
                KeyHint::new("a", "account"),
                KeyHint::new("d", "export"),
                KeyHint::new("u", "import"),
                KeyHint::new("r", "refresh"),
                KeyHint::new("q", "quit"),
            ],
            Focus::TransactionForm | Focus::AccountForm => vec![
                KeyHint::new("↑↓", "field"),
                KeyHint::new("←→", "type"),
                KeyHint::new("Enter", "save"),
                KeyHint::new("Tab", "panel"),
                KeyHint::new("Esc", "back"),
            ],
        },
    }
}

/// Rect of the given size centered in `area`.
pub(crate) fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
