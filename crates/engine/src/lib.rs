//! Client-side aggregation for the budgeting UI.
//!
//! Everything here is a pure function of already-fetched records: net-worth
//! totals, per-account income/expense summaries, list pagination and the
//! formatting used to display amounts and dates. Balances and persistence
//! live on the server.

pub use currency::{Currency, format_currency};
pub use dates::{display_date, today_stamp};
pub use error::EngineError;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageCursor, paginate};
pub use summary::{Direction, Summary, direction, parse_amount, summarize, total_balance};

mod currency;
mod dates;
mod error;
mod pagination;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
