//! Terminal client for the budgeting API.
//!
//! [`state::BudgetState`] caches accounts and transactions fetched through a
//! [`client::BudgetApi`]; [`app::App`] drives it from keyboard input and
//! [`ui`] draws it with ratatui.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod files;
pub mod forms;
pub mod logging;
pub mod state;
pub mod ui;
