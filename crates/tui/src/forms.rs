use api_types::{Money, account::AccountKind, transaction::TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    Name,
    Kind,
}

/// New account entry. The balance always starts at zero.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub name: String,
    pub kind: AccountKind,
    pub focus: AccountField,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub kind: AccountKind,
}

impl AccountForm {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            AccountField::Name => AccountField::Kind,
            AccountField::Kind => AccountField::Name,
        };
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            AccountField::Name => self.name.push(ch),
            AccountField::Kind if ch == ' ' => self.cycle_kind(),
            AccountField::Kind => {}
        }
    }

    pub fn pop(&mut self) {
        if self.focus == AccountField::Name {
            self.name.pop();
        }
    }

    pub fn cycle_kind(&mut self) {
        self.kind = self.kind.cycle();
    }

    pub fn validate(&self) -> Result<AccountDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Account name is required.".to_string());
        }
        Ok(AccountDraft {
            name: name.to_string(),
            kind: self.kind,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Kind,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub focus: TransactionField,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub account_id: String,
}

impl TransactionForm {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            TransactionField::Description => TransactionField::Amount,
            TransactionField::Amount => TransactionField::Kind,
            TransactionField::Kind => TransactionField::Description,
        };
    }

    pub fn previous_field(&mut self) {
        self.focus = match self.focus {
            TransactionField::Description => TransactionField::Kind,
            TransactionField::Amount => TransactionField::Description,
            TransactionField::Kind => TransactionField::Amount,
        };
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            TransactionField::Description => self.description.push(ch),
            TransactionField::Amount => {
                if ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-') {
                    self.amount.push(ch);
                }
            }
            TransactionField::Kind if ch == ' ' => self.toggle_kind(),
            TransactionField::Kind => {}
        }
    }

    pub fn pop(&mut self) {
        match self.focus {
            TransactionField::Description => {
                self.description.pop();
            }
            TransactionField::Amount => {
                self.amount.pop();
            }
            TransactionField::Kind => {}
        }
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    /// Checks the entry against the currently selected account.
    pub fn validate(&self, account_id: Option<&str>) -> Result<TransactionDraft, String> {
        let Some(account_id) = account_id else {
            return Err("Select an account first.".to_string());
        };
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Description is required.".to_string());
        }
        let amount = engine::parse_amount(&self.amount).map_err(|err| err.to_string())?;
        Ok(TransactionDraft {
            description: description.to_string(),
            amount,
            kind: self.kind,
            account_id: account_id.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
