//! Application state container.
//!
//! Owns the cached accounts and transactions and is the only place that
//! mutates them. Every write goes to the API first and is followed by a full
//! re-fetch; there is no incremental patching of the cache.

use std::path::PathBuf;

use api_types::{
    Money,
    account::{Account, AccountKind, AccountNew},
    transaction::{Transaction, TransactionKind},
};
use chrono::{DateTime, Local};
use engine::{DEFAULT_PAGE_SIZE, Page, PageCursor, Summary};
use uuid::Uuid;

use crate::{
    client::{BudgetApi, ClientError},
    error::Result,
    files::{DataFiles, EXPORT_FILE_NAME},
};

/// Whether there is data to show.
///
/// `Loading` until the first account fetch settles, then `Ready` or `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Loading,
    Ready,
    Empty,
}

#[derive(Debug)]
pub struct BudgetState<A> {
    api: A,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    selected_account_id: Option<String>,
    is_loading: bool,
    last_error: Option<String>,
    availability: Availability,
    cursor: PageCursor,
    page_size: usize,
    last_refresh: Option<DateTime<Local>>,
}

impl<A: BudgetApi> BudgetState<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            accounts: Vec::new(),
            transactions: Vec::new(),
            selected_account_id: None,
            is_loading: true,
            last_error: None,
            availability: Availability::Loading,
            cursor: PageCursor::default(),
            page_size: DEFAULT_PAGE_SIZE,
            last_refresh: None,
        }
    }

    /// Transactions per page of the list; zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn selected_account_id(&self) -> Option<&str> {
        self.selected_account_id.as_deref()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Net worth over the cached accounts.
    pub fn total_balance(&self) -> Money {
        engine::total_balance(&self.accounts)
    }

    /// Summary of the selected account, if any.
    pub fn summary(&self) -> Option<Summary> {
        let id = self.selected_account_id.as_deref()?;
        Some(engine::summarize(&self.transactions, id))
    }

    /// Current page of the list, scoped to the selected account when there is one.
    pub fn page(&self) -> Page<'_> {
        engine::paginate(
            &self.transactions,
            self.selected_account_id.as_deref(),
            self.cursor.page(),
            self.page_size,
        )
    }

    pub fn next_page(&mut self) {
        let total_pages = self.page().total_pages;
        self.cursor.next(total_pages);
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous();
    }

    /// Keeps the cursor on an existing page once the list has changed.
    fn clamp_cursor(&mut self) {
        let total_pages = self.page().total_pages;
        self.cursor.clamp(total_pages);
    }

    /// Focuses an account for the summary, the list and transaction entry.
    pub fn select_account(&mut self, account_id: impl Into<String>) {
        let account_id = account_id.into();
        if self.selected_account_id.as_deref() != Some(account_id.as_str()) {
            self.cursor.reset();
        }
        self.selected_account_id = Some(account_id);
    }

    /// Initial load: fetches both collections concurrently.
    ///
    /// The account fetch settles the availability and clears
    /// [`is_loading`](Self::is_loading) as soon as it completes, without
    /// waiting for the transactions. A failed fetch blanks its collection and
    /// is remembered in [`last_error`](Self::last_error).
    pub async fn initialize(&mut self) {
        self.is_loading = true;
        self.availability = Availability::Loading;

        let Self {
            api,
            accounts,
            is_loading,
            availability,
            last_error,
            ..
        } = &mut *self;
        let api = &*api;

        let load_accounts = async move {
            let loaded = match api.accounts().await {
                Ok(fetched) => {
                    tracing::info!(count = fetched.len(), "accounts loaded");
                    *accounts = fetched;
                    *availability = Availability::Ready;
                    true
                }
                Err(err) => {
                    tracing::error!("failed to load accounts: {err}");
                    accounts.clear();
                    *availability = Availability::Empty;
                    *last_error = Some(err.to_string());
                    false
                }
            };
            *is_loading = false;
            loaded
        };

        let (accounts_loaded, transactions) = tokio::join!(load_accounts, api.transactions());

        let transactions_loaded = match transactions {
            Ok(transactions) => {
                tracing::info!(count = transactions.len(), "transactions loaded");
                self.transactions = transactions;
                true
            }
            Err(err) => {
                tracing::error!("failed to load transactions: {err}");
                self.transactions.clear();
                self.last_error = Some(err.to_string());
                false
            }
        };
        self.clamp_cursor();

        if accounts_loaded && transactions_loaded {
            self.last_error = None;
            self.last_refresh = Some(Local::now());
        }
    }

    /// Re-fetches accounts, then transactions, replacing the cache wholesale.
    ///
    /// On failure the collection that failed keeps its previous contents.
    pub async fn refresh(&mut self) -> std::result::Result<(), ClientError> {
        let accounts = self.api.accounts().await?;
        self.accounts = accounts;
        if self.availability == Availability::Empty {
            self.availability = Availability::Ready;
        }

        let transactions = self.api.transactions().await?;
        self.transactions = transactions;
        self.clamp_cursor();
        self.last_error = None;
        self.last_refresh = Some(Local::now());
        tracing::debug!(
            accounts = self.accounts.len(),
            transactions = self.transactions.len(),
            "cache refreshed"
        );
        Ok(())
    }

    /// Creates an account with a zero balance.
    ///
    /// When nothing was selected beforehand the new account becomes the
    /// selection: the id echoed by the server if there is one, otherwise the
    /// locally generated id. A rejected request is logged and dropped.
    pub async fn add_account(
        &mut self,
        name: &str,
        kind: AccountKind,
    ) -> std::result::Result<(), ClientError> {
        let local_id = Uuid::new_v4().to_string();
        let payload = AccountNew {
            name: name.to_string(),
            kind,
            balance: Money::ZERO,
        };

        let created = match self.api.create_account(&payload).await {
            Ok(created) => created,
            Err(ClientError::Http { status, message }) => {
                tracing::warn!(%status, "account creation rejected: {message}");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let had_selection = self.selected_account_id.is_some();
        let refreshed = self.refresh().await;
        if !had_selection {
            let id = created.map(|account| account.id).unwrap_or(local_id);
            self.select_account(id);
        }
        refreshed
    }

    /// Records a transaction dated today.
    ///
    /// The sign of `amount` is normalized from `kind`: expenses are stored
    /// negative, income positive. A rejected request is logged and dropped.
    pub async fn add_transaction(
        &mut self,
        description: &str,
        amount: Money,
        kind: TransactionKind,
        account_id: &str,
    ) -> std::result::Result<(), ClientError> {
        let amount = match kind {
            TransactionKind::Expense => -amount.abs(),
            TransactionKind::Income => amount.abs(),
        };
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            description: description.to_string(),
            amount,
            date: engine::today_stamp(),
            kind,
            account_id: account_id.to_string(),
            to_account_id: None,
            from_account_id: None,
        };

        match self.api.create_transaction(&transaction).await {
            Ok(()) => self.refresh().await,
            Err(ClientError::Http { status, message }) => {
                tracing::warn!(%status, "transaction creation rejected: {message}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Downloads the full dataset and saves it as two-space indented JSON.
    pub async fn export_data(&self, files: &impl DataFiles) -> Result<PathBuf> {
        let data = self.api.download_data().await?;
        let contents = serde_json::to_string_pretty(&data)?;
        let path = files.save(EXPORT_FILE_NAME, &contents)?;
        tracing::info!(path = %path.display(), "data exported");
        Ok(path)
    }

    /// Uploads a previously exported document verbatim, then refreshes.
    pub async fn import_data(&mut self, contents: String) -> std::result::Result<(), ClientError> {
        self.api.upload_data(contents).await?;
        tracing::info!("data imported");
        self.refresh().await
    }
}
