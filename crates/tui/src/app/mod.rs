use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::Currency;

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
    files::{DataFiles, DirectoryFiles},
    forms::{AccountField, AccountForm, TransactionField, TransactionForm},
    state::{Availability, BudgetState},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Accounts,
    TransactionForm,
    AccountForm,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Accounts => Self::TransactionForm,
            Self::TransactionForm => Self::AccountForm,
            Self::AccountForm => Self::Accounts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

/// Path typed by the user before an import.
#[derive(Debug, Clone, Default)]
pub struct UploadPrompt {
    pub path: String,
}

/// Everything the renderer needs besides the budget data.
#[derive(Debug)]
pub struct UiState {
    pub focus: Focus,
    pub highlighted: usize,
    pub account_form: AccountForm,
    pub transaction_form: TransactionForm,
    pub upload: Option<UploadPrompt>,
    pub toast: Option<ToastState>,
    pub currency: Currency,
    pub base_url: String,
}

impl UiState {
    fn new(config: &AppConfig) -> Self {
        Self {
            focus: Focus::default(),
            highlighted: 0,
            account_form: AccountForm::default(),
            transaction_form: TransactionForm::default(),
            upload: None,
            toast: None,
            currency: config.currency,
            base_url: config.base_url.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.upload.is_some() || self.focus != Focus::Accounts
    }

    fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }
}

pub struct App {
    budget: BudgetState<Client>,
    files: DirectoryFiles,
    pub ui: UiState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, config.request_timeout())?;
        let ui = UiState::new(&config);
        Ok(Self {
            budget: BudgetState::new(client).with_page_size(config.page_size),
            files: DirectoryFiles::new(config.export_dir),
            ui,
            should_quit: false,
        })
    }

    pub fn budget(&self) -> &BudgetState<Client> {
        &self.budget
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::install_panic_hook();
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);
        let mut initialized = false;

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.budget, &self.ui))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            // The loading screen is drawn once before the first fetch.
            if !initialized {
                self.budget.initialize().await;
                initialized = true;
                continue;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                    }
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }
            self.ui.expire_toast(Instant::now());
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.ui.upload.is_some() {
            self.handle_upload_key(action).await;
            return;
        }

        match self.budget.availability() {
            Availability::Loading => {}
            Availability::Empty => self.handle_empty_key(action).await,
            Availability::Ready => match self.ui.focus {
                Focus::Accounts => self.handle_accounts_key(action).await,
                Focus::TransactionForm => self.handle_transaction_form_key(action).await,
                Focus::AccountForm => self.handle_account_form_key(action).await,
            },
        }
    }

    async fn handle_empty_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('u') => self.ui.upload = Some(UploadPrompt::default()),
            AppAction::Input('r') => self.refresh().await,
            _ => {}
        }
    }

    async fn handle_accounts_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => self.ui.focus = self.ui.focus.next(),
            AppAction::Up | AppAction::Input('k') => self.move_highlight(-1),
            AppAction::Down | AppAction::Input('j') => self.move_highlight(1),
            AppAction::Submit => self.select_highlighted(),
            AppAction::Right | AppAction::Input('n' | ']') => self.budget.next_page(),
            AppAction::Left | AppAction::Input('p' | '[') => self.budget.previous_page(),
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('a') => self.ui.focus = Focus::AccountForm,
            AppAction::Input('t') => self.ui.focus = Focus::TransactionForm,
            AppAction::Input('r') => self.refresh().await,
            AppAction::Input('d') => self.export().await,
            AppAction::Input('u') => self.ui.upload = Some(UploadPrompt::default()),
            _ => {}
        }
    }

    async fn handle_account_form_key(&mut self, action: AppAction) {
        let form = &mut self.ui.account_form;
        match action {
            AppAction::Cancel => self.ui.focus = Focus::Accounts,
            AppAction::NextField => self.ui.focus = self.ui.focus.next(),
            AppAction::Up | AppAction::Down => form.next_field(),
            AppAction::Left | AppAction::Right if form.focus == AccountField::Kind => {
                form.cycle_kind();
            }
            AppAction::Backspace => form.pop(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => self.submit_account().await,
            _ => {}
        }
    }

    async fn handle_transaction_form_key(&mut self, action: AppAction) {
        let form = &mut self.ui.transaction_form;
        match action {
            AppAction::Cancel => self.ui.focus = Focus::Accounts,
            AppAction::NextField => self.ui.focus = self.ui.focus.next(),
            AppAction::Down => form.next_field(),
            AppAction::Up => form.previous_field(),
            AppAction::Left | AppAction::Right if form.focus == TransactionField::Kind => {
                form.toggle_kind();
            }
            AppAction::Backspace => form.pop(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => self.submit_transaction().await,
            _ => {}
        }
    }

    async fn handle_upload_key(&mut self, action: AppAction) {
        let Some(prompt) = self.ui.upload.as_mut() else {
            return;
        };
        match action {
            AppAction::Cancel => self.ui.upload = None,
            AppAction::Backspace => {
                prompt.path.pop();
            }
            AppAction::Input(ch) => prompt.path.push(ch),
            AppAction::Submit => {
                let path = PathBuf::from(prompt.path.trim());
                self.ui.upload = None;
                self.import(&path).await;
            }
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        if let Some(prompt) = self.ui.upload.as_mut() {
            prompt.path.push_str(line);
            return;
        }
        match (self.budget.availability(), self.ui.focus) {
            (Availability::Ready, Focus::AccountForm)
                if self.ui.account_form.focus == AccountField::Name =>
            {
                self.ui.account_form.name.push_str(line);
            }
            (Availability::Ready, Focus::TransactionForm) => {
                line.chars().for_each(|ch| self.ui.transaction_form.push(ch));
            }
            _ => {}
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        let len = self.budget.accounts().len();
        if len == 0 {
            self.ui.highlighted = 0;
            return;
        }
        self.ui.highlighted = self
            .ui
            .highlighted
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    fn select_highlighted(&mut self) {
        if let Some(account) = self.budget.accounts().get(self.ui.highlighted) {
            let id = account.id.clone();
            self.budget.select_account(id);
        }
    }

    async fn submit_account(&mut self) {
        let draft = match self.ui.account_form.validate() {
            Ok(draft) => draft,
            Err(message) => {
                self.ui.account_form.message = Some(message);
                return;
            }
        };
        if let Err(err) = self.budget.add_account(&draft.name, draft.kind).await {
            tracing::error!("failed to add account: {err}");
        }
        self.ui.account_form.reset();
        self.ui.focus = Focus::Accounts;
        self.sync_highlight();
    }

    async fn submit_transaction(&mut self) {
        let form = &mut self.ui.transaction_form;
        let draft = match form.validate(self.budget.selected_account_id()) {
            Ok(draft) => draft,
            Err(message) => {
                form.message = Some(message);
                return;
            }
        };
        let result = self
            .budget
            .add_transaction(&draft.description, draft.amount, draft.kind, &draft.account_id)
            .await;
        if let Err(err) = result {
            tracing::error!("failed to add transaction: {err}");
        }
        self.ui.transaction_form.reset();
    }

    async fn refresh(&mut self) {
        if let Err(err) = self.budget.refresh().await {
            tracing::error!("refresh failed: {err}");
        }
        self.sync_highlight();
    }

    async fn export(&mut self) {
        match self.budget.export_data(&self.files).await {
            Ok(path) => self
                .ui
                .show_toast(ToastLevel::Success, format!("Saved {}", path.display())),
            Err(err) => {
                tracing::error!("export failed: {err}");
                self.ui.show_toast(ToastLevel::Error, "Export failed");
            }
        }
    }

    async fn import(&mut self, path: &Path) {
        let contents = match self.files.load(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(path = %path.display(), "import skipped: {err}");
                return;
            }
        };
        match self.budget.import_data(contents).await {
            Ok(()) => self.ui.show_toast(ToastLevel::Info, "Data imported"),
            Err(err) => tracing::warn!("import failed: {err}"),
        }
        self.sync_highlight();
    }

    /// Keeps the highlight on the selected account after the list changes.
    fn sync_highlight(&mut self) {
        let accounts = self.budget.accounts();
        let selected = self
            .budget
            .selected_account_id()
            .and_then(|id| accounts.iter().position(|account| account.id == id));
        self.ui.highlighted = selected
            .unwrap_or(self.ui.highlighted)
            .min(accounts.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn ctrl_c_quits_from_any_screen() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn keys_are_ignored_while_loading() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('q'))).await;
        app.handle_key(press(KeyCode::Tab)).await;
        assert!(!app.should_quit);
        assert_eq!(app.ui.focus, Focus::Accounts);
    }

    #[test]
    fn focus_cycles_through_panels() {
        let focus = Focus::Accounts.next();
        assert_eq!(focus, Focus::TransactionForm);
        assert_eq!(focus.next(), Focus::AccountForm);
        assert_eq!(focus.next().next(), Focus::Accounts);
    }

    #[test]
    fn editing_follows_focus_and_prompt() {
        let mut ui = UiState::new(&AppConfig::default());
        assert!(!ui.is_editing());
        ui.focus = Focus::AccountForm;
        assert!(ui.is_editing());
        ui.focus = Focus::Accounts;
        ui.upload = Some(UploadPrompt::default());
        assert!(ui.is_editing());
    }

    #[test]
    fn toast_expires() {
        let mut ui = UiState::new(&AppConfig::default());
        ui.show_toast(ToastLevel::Info, "Saved");
        ui.expire_toast(Instant::now());
        assert!(ui.toast.is_some());
        ui.expire_toast(Instant::now() + TOAST_TTL);
        assert!(ui.toast.is_none());
    }

    #[test]
    fn paste_fills_upload_prompt_with_first_line() {
        let mut app = app();
        app.ui.upload = Some(UploadPrompt::default());
        app.handle_paste("exports/budget-data.json\nignored");
        assert_eq!(
            app.ui.upload.as_ref().map(|prompt| prompt.path.as_str()),
            Some("exports/budget-data.json")
        );
    }

    #[tokio::test]
    async fn escape_closes_upload_prompt() {
        let mut app = app();
        app.ui.upload = Some(UploadPrompt::default());
        app.handle_key(press(KeyCode::Char('x'))).await;
        assert_eq!(app.ui.upload.as_ref().map(|p| p.path.as_str()), Some("x"));
        app.handle_key(press(KeyCode::Esc)).await;
        assert!(app.ui.upload.is_none());
    }

    #[test]
    fn highlight_stays_at_zero_without_accounts() {
        let mut app = app();
        app.move_highlight(1);
        assert_eq!(app.ui.highlighted, 0);
        app.move_highlight(-1);
        assert_eq!(app.ui.highlighted, 0);
    }
}
