//! Wire types shared between the budgeting client and the HTTP API.
//!
//! Every type here mirrors a JSON object the server sends or accepts. The
//! server is the system of record; these shapes are what the client caches.

use serde::{Deserialize, Serialize};

pub mod money;

pub use money::{Money, ParseMoneyError};

/// Error body returned by the server on non-success responses, when it has one.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod account {
    use super::*;

    /// Category of an account.
    ///
    /// Only `savings`, `retirement` and `stock` accounts count toward net worth.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountKind {
        #[default]
        Savings,
        Budget,
        Allowance,
        Retirement,
        Stock,
    }

    impl AccountKind {
        pub const ALL: [AccountKind; 5] = [
            Self::Savings,
            Self::Budget,
            Self::Allowance,
            Self::Retirement,
            Self::Stock,
        ];

        pub fn label(self) -> &'static str {
            match self {
                Self::Savings => "Savings",
                Self::Budget => "Budget",
                Self::Allowance => "Allowance",
                Self::Retirement => "Retirement",
                Self::Stock => "Stock",
            }
        }

        /// Whether balances of this kind are part of the net-worth total.
        pub fn counts_toward_net_worth(self) -> bool {
            matches!(self, Self::Savings | Self::Retirement | Self::Stock)
        }

        /// Next kind in display order, wrapping around.
        pub fn cycle(self) -> Self {
            let index = Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0);
            Self::ALL[(index + 1) % Self::ALL.len()]
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Account {
        pub id: String,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: AccountKind,
        /// Computed by the server.
        pub balance: Money,
    }

    /// Request body for `POST /account`.
    ///
    /// The id is not sent: the server assigns the authoritative one.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: AccountKind,
        pub balance: Money,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        #[default]
        Expense,
    }

    impl TransactionKind {
        pub fn label(self) -> &'static str {
            match self {
                Self::Income => "Income",
                Self::Expense => "Expense",
            }
        }

        pub fn toggle(self) -> Self {
            match self {
                Self::Income => Self::Expense,
                Self::Expense => Self::Income,
            }
        }
    }

    /// A single dated monetary event.
    ///
    /// Transfers carry `to_account_id` and/or `from_account_id`; a `null` and a
    /// missing field both decode to `None`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: String,
        pub description: String,
        /// Negative for expenses, positive for income.
        pub amount: Money,
        /// Calendar date as stored by the server (opaque string).
        pub date: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub account_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub to_account_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub from_account_id: Option<String>,
    }

    impl Transaction {
        /// Returns `true` if any of the three account references is `account_id`.
        pub fn touches(&self, account_id: &str) -> bool {
            self.account_id == account_id
                || self.to_account_id.as_deref() == Some(account_id)
                || self.from_account_id.as_deref() == Some(account_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        account::{Account, AccountKind, AccountNew},
        transaction::{Transaction, TransactionKind},
        *,
    };

    #[test]
    fn account_decodes_type_field() {
        let account: Account = serde_json::from_str(
            r#"{"id":"a1","name":"Rainy Day","type":"retirement","balance":120.5}"#,
        )
        .unwrap();
        assert_eq!(account.kind, AccountKind::Retirement);
        assert_eq!(account.balance, Money::new(12050));
    }

    #[test]
    fn account_new_encodes_zero_balance() {
        let body = serde_json::to_value(AccountNew {
            name: "Trip Fund".to_string(),
            kind: AccountKind::Savings,
            balance: Money::ZERO,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Trip Fund", "type": "savings", "balance": 0.0})
        );
    }

    #[test]
    fn transaction_null_and_missing_transfer_ids_are_none() {
        let with_null: Transaction = serde_json::from_str(
            r#"{"id":"t1","description":"Coffee","amount":-3.5,"date":"10/18/2026",
                "type":"expense","account_id":"a1","to_account_id":null}"#,
        )
        .unwrap();
        assert_eq!(with_null.to_account_id, None);
        assert_eq!(with_null.from_account_id, None);
        assert_eq!(with_null.kind, TransactionKind::Expense);
    }

    #[test]
    fn transaction_omits_absent_transfer_ids() {
        let tx = Transaction {
            id: "t1".to_string(),
            description: "Paycheck".to_string(),
            amount: Money::new(150000),
            date: "10/18/2026".to_string(),
            kind: TransactionKind::Income,
            account_id: "a1".to_string(),
            to_account_id: None,
            from_account_id: None,
        };
        let value = serde_json::to_value(&tx).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("to_account_id"));
        assert!(!object.contains_key("from_account_id"));
        assert_eq!(object["type"], "income");
    }

    #[test]
    fn touches_matches_any_reference() {
        let tx = Transaction {
            id: "t1".to_string(),
            description: "Move".to_string(),
            amount: Money::new(100),
            date: "1/2/2026".to_string(),
            kind: TransactionKind::Income,
            account_id: "a1".to_string(),
            to_account_id: Some("a2".to_string()),
            from_account_id: Some("a3".to_string()),
        };
        assert!(tx.touches("a1"));
        assert!(tx.touches("a2"));
        assert!(tx.touches("a3"));
        assert!(!tx.touches("a4"));
    }

    #[test]
    fn kind_cycle_visits_every_kind_and_wraps() {
        let mut kind = AccountKind::default();
        let mut seen = Vec::new();
        for _ in 0..AccountKind::ALL.len() {
            seen.push(kind);
            kind = kind.cycle();
        }
        assert_eq!(seen, AccountKind::ALL.to_vec());
        assert_eq!(kind, AccountKind::Savings);
    }

    #[test]
    fn net_worth_kinds() {
        let counted: Vec<_> = AccountKind::ALL
            .into_iter()
            .filter(|kind| kind.counts_toward_net_worth())
            .collect();
        assert_eq!(
            counted,
            vec![
                AccountKind::Savings,
                AccountKind::Retirement,
                AccountKind::Stock
            ]
        );
    }
}
