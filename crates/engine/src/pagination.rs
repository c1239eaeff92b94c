use api_types::transaction::Transaction;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of the transaction list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: Vec<&'a Transaction>,
    /// Never less than 1, even for an empty list.
    pub total_pages: usize,
    /// 1-based.
    pub current_page: usize,
}

/// Slices `transactions` into pages of `page_size` items.
///
/// When `account_id` is given only records referencing it through
/// `account_id`, `to_account_id` or `from_account_id` are kept; the
/// transaction type plays no part in the filter. `page` is 1-based and is
/// clamped to `[1, total_pages]`.
#[must_use]
pub fn paginate<'a>(
    transactions: &'a [Transaction],
    account_id: Option<&str>,
    page: usize,
    page_size: usize,
) -> Page<'a> {
    let page_size = page_size.max(1);
    let filtered: Vec<&Transaction> = match account_id {
        Some(id) => transactions.iter().filter(|tx| tx.touches(id)).collect(),
        None => transactions.iter().collect(),
    };

    let total_pages = filtered.len().div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);
    let items = filtered
        .into_iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        total_pages,
        current_page,
    }
}

/// Previous/next navigation over the transaction list.
///
/// Both steps are no-ops at their bound, mirroring disabled buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    #[must_use]
    pub fn page(self) -> usize {
        self.page
    }

    #[must_use]
    pub fn has_previous(self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(self, total_pages: usize) -> bool {
        self.page < total_pages
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.has_next(total_pages) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pulls the cursor back inside `[1, total_pages]` after the list shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use api_types::{Money, transaction::TransactionKind};

    use super::*;

    fn sample(count: usize, account_id: &str) -> Vec<Transaction> {
        (0..count)
            .map(|i| Transaction {
                id: format!("{account_id}-{i}"),
                description: format!("item {i}"),
                amount: Money::new(-100),
                date: "10/18/2026".to_string(),
                kind: TransactionKind::Expense,
                account_id: account_id.to_string(),
                to_account_id: None,
                from_account_id: None,
            })
            .collect()
    }

    #[test]
    fn empty_list_has_one_page() {
        let page = paginate(&[], None, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_counts_follow_ceiling_division() {
        for (count, pages) in [(1, 1), (9, 1), (10, 1), (11, 2), (20, 2), (21, 3), (95, 10)] {
            let transactions = sample(count, "a1");
            let page = paginate(&transactions, None, 1, DEFAULT_PAGE_SIZE);
            assert_eq!(page.total_pages, pages, "count {count}");
        }
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let transactions = sample(23, "a1");
        let first = paginate(&transactions, None, 1, DEFAULT_PAGE_SIZE);
        let last = paginate(&transactions, None, 3, DEFAULT_PAGE_SIZE);
        assert_eq!(first.items.len(), 10);
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].id, "a1-20");

        let exact = sample(20, "a1");
        let last = paginate(&exact, None, 2, DEFAULT_PAGE_SIZE);
        assert_eq!(last.items.len(), 10);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let transactions = sample(15, "a1");
        assert_eq!(paginate(&transactions, None, 0, 10).current_page, 1);
        let beyond = paginate(&transactions, None, 9, 10);
        assert_eq!(beyond.current_page, 2);
        assert_eq!(beyond.items.len(), 5);
    }

    #[test]
    fn account_filter_ignores_transaction_type() {
        let mut transactions = sample(3, "a1");
        transactions.extend(sample(4, "a2"));
        transactions.push(Transaction {
            to_account_id: Some("a1".to_string()),
            ..sample(1, "a3").remove(0)
        });

        let page = paginate(&transactions, Some("a1"), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items.len(), 4);
        assert!(page.items.iter().all(|tx| tx.touches("a1")));

        let all = paginate(&transactions, None, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(all.items.len(), 8);
    }

    #[test]
    fn cursor_steps_stop_at_bounds() {
        let mut cursor = PageCursor::default();
        cursor.previous();
        assert_eq!(cursor.page(), 1);

        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.page(), 3);
        assert!(!cursor.has_next(3));
        assert!(cursor.has_previous());

        cursor.reset();
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn clamp_follows_a_shrinking_list() {
        let mut cursor = PageCursor::default();
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.page(), 3);

        cursor.clamp(1);
        assert_eq!(cursor.page(), 1);
        assert!(!cursor.has_previous());

        cursor.clamp(0);
        assert_eq!(cursor.page(), 1);

        cursor.next(2);
        cursor.clamp(5);
        assert_eq!(cursor.page(), 2);
    }
}
