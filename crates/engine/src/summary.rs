use api_types::{
    Money, ParseMoneyError,
    account::Account,
    transaction::{Transaction, TransactionKind},
};

use crate::{EngineError, ResultEngine};

/// Income, expenses and net balance of one account, as shown in the summary
/// widget.
///
/// `expenses` is always non-negative and `balance == income - expenses`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Display direction of a transaction in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Net worth: balances of savings, retirement and stock accounts.
///
/// Budget and allowance accounts are spending buckets and are excluded.
#[must_use]
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts
        .iter()
        .filter(|account| account.kind.counts_toward_net_worth())
        .map(|account| account.balance)
        .sum()
}

/// Summarizes the transactions that reference `account_id` in any of their
/// three account fields.
///
/// A record counts as income when it is typed `income` or has a
/// `to_account_id`, and as an expense when it is typed `expense` or has a
/// `from_account_id`. Both predicates are evaluated independently, so a record
/// matching both contributes to both sums.
#[must_use]
pub fn summarize(transactions: &[Transaction], account_id: &str) -> Summary {
    let mut summary = Summary::default();

    for tx in transactions.iter().filter(|tx| tx.touches(account_id)) {
        if tx.kind == TransactionKind::Income || tx.to_account_id.is_some() {
            summary.income += tx.amount;
        }
        if tx.kind == TransactionKind::Expense || tx.from_account_id.is_some() {
            summary.expenses += tx.amount.abs();
        }
    }

    summary.balance = summary.income - summary.expenses;
    summary
}

/// Outgoing when typed `expense` or carrying a `from_account_id`.
#[must_use]
pub fn direction(tx: &Transaction) -> Direction {
    if tx.kind == TransactionKind::Expense || tx.from_account_id.is_some() {
        Direction::Outgoing
    } else {
        Direction::Incoming
    }
}

/// Parses an amount typed by the user.
pub fn parse_amount(input: &str) -> ResultEngine<Money> {
    input.parse::<Money>().map_err(|err| match err {
        ParseMoneyError::Empty => EngineError::InvalidAmount("empty amount".to_string()),
        other => EngineError::InvalidAmount(format!("{other}: '{}'", input.trim())),
    })
}

#[cfg(test)]
mod tests {
    use api_types::account::AccountKind;

    use super::*;

    fn account(id: &str, kind: AccountKind, cents: i64) -> Account {
        Account {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            balance: Money::new(cents),
        }
    }

    fn tx(
        id: &str,
        kind: TransactionKind,
        cents: i64,
        account_id: &str,
        to: Option<&str>,
        from: Option<&str>,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            description: id.to_string(),
            amount: Money::new(cents),
            date: "10/18/2026".to_string(),
            kind,
            account_id: account_id.to_string(),
            to_account_id: to.map(str::to_string),
            from_account_id: from.map(str::to_string),
        }
    }

    #[test]
    fn total_balance_only_counts_net_worth_kinds() {
        let accounts = vec![
            account("a", AccountKind::Savings, 100_00),
            account("b", AccountKind::Budget, 50_00),
            account("c", AccountKind::Stock, -20_00),
        ];
        assert_eq!(total_balance(&accounts), Money::new(80_00));
    }

    #[test]
    fn total_balance_includes_retirement_and_skips_allowance() {
        let accounts = vec![
            account("a", AccountKind::Retirement, 1_000_00),
            account("b", AccountKind::Allowance, 5_00),
        ];
        assert_eq!(total_balance(&accounts), Money::new(1_000_00));
        assert_eq!(total_balance(&[]), Money::ZERO);
    }

    #[test]
    fn huge_server_amounts_do_not_overflow() {
        let huge = Money::from_major_f64(5e16).unwrap().cents();
        let accounts = vec![
            account("a", AccountKind::Savings, huge),
            account("b", AccountKind::Savings, huge),
        ];
        assert_eq!(total_balance(&accounts), Money::new(i64::MAX));

        let transactions = vec![
            tx("big-in", TransactionKind::Income, huge, "a1", None, None),
            tx("big-in-2", TransactionKind::Income, huge, "a1", None, None),
            tx("min", TransactionKind::Expense, i64::MIN, "a1", None, None),
        ];
        let summary = summarize(&transactions, "a1");
        assert_eq!(summary.income, Money::new(i64::MAX));
        assert_eq!(summary.expenses, Money::new(i64::MAX));
        assert_eq!(summary.balance, Money::ZERO);
    }

    #[test]
    fn summarize_splits_income_and_expenses() {
        let transactions = vec![
            tx("pay", TransactionKind::Income, 2_000_00, "a1", None, None),
            tx("rent", TransactionKind::Expense, -800_00, "a1", None, None),
            tx("food", TransactionKind::Expense, -45_50, "a1", None, None),
            tx("other", TransactionKind::Income, 99_00, "a2", None, None),
        ];

        let summary = summarize(&transactions, "a1");
        assert_eq!(summary.income, Money::new(2_000_00));
        assert_eq!(summary.expenses, Money::new(845_50));
        assert_eq!(summary.balance, Money::new(1_154_50));
    }

    #[test]
    fn summarize_matches_transfer_references() {
        let transactions = vec![
            tx("in", TransactionKind::Income, 30_00, "a2", Some("a1"), None),
            tx("out", TransactionKind::Expense, -10_00, "a3", None, Some("a1")),
        ];

        let summary = summarize(&transactions, "a1");
        assert_eq!(summary.income, Money::new(30_00));
        assert_eq!(summary.expenses, Money::new(10_00));
    }

    #[test]
    fn summarize_counts_records_matching_both_predicates_twice() {
        let transactions = vec![tx(
            "odd",
            TransactionKind::Income,
            40_00,
            "a1",
            None,
            Some("a9"),
        )];

        let summary = summarize(&transactions, "a1");
        assert_eq!(summary.income, Money::new(40_00));
        assert_eq!(summary.expenses, Money::new(40_00));
        assert_eq!(summary.balance, Money::ZERO);
    }

    #[test]
    fn summarize_expenses_never_negative() {
        let transactions = vec![
            tx("x", TransactionKind::Expense, -12_00, "a1", None, None),
            tx("y", TransactionKind::Expense, 7_00, "a1", None, None),
        ];

        let summary = summarize(&transactions, "a1");
        assert_eq!(summary.expenses, Money::new(19_00));
        assert!(!summary.expenses.is_negative());
        assert_eq!(summary.balance, summary.income - summary.expenses);
    }

    #[test]
    fn summarize_unknown_account_is_zero() {
        let transactions = vec![tx("pay", TransactionKind::Income, 1_00, "a1", None, None)];
        assert_eq!(summarize(&transactions, "nope"), Summary::default());
    }

    #[test]
    fn direction_follows_type_or_source_account() {
        let income = tx("i", TransactionKind::Income, 1_00, "a1", None, None);
        let expense = tx("e", TransactionKind::Expense, -1_00, "a1", None, None);
        let transfer_out = tx("t", TransactionKind::Income, 1_00, "a1", None, Some("a2"));
        let transfer_in = tx("u", TransactionKind::Income, 1_00, "a1", Some("a2"), None);

        assert_eq!(direction(&income), Direction::Incoming);
        assert_eq!(direction(&expense), Direction::Outgoing);
        assert_eq!(direction(&transfer_out), Direction::Outgoing);
        assert_eq!(direction(&transfer_in), Direction::Incoming);
    }

    #[test]
    fn parse_amount_reports_input() {
        assert_eq!(parse_amount("25.00").unwrap(), Money::new(25_00));
        assert_eq!(
            parse_amount("  "),
            Err(EngineError::InvalidAmount("empty amount".to_string()))
        );
        assert!(matches!(
            parse_amount("1.234"),
            Err(EngineError::InvalidAmount(message)) if message.contains("1.234")
        ));
    }
}
