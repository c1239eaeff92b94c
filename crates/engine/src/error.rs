//! Errors raised while interpreting user input.
//!
//! - [`InvalidAmount`] when an amount typed by the user cannot be parsed.
//! - [`UnknownCurrency`] when a configured currency code is not supported.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`UnknownCurrency`]: EngineError::UnknownCurrency
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unsupported currency: {0}")]
    UnknownCurrency(String),
}
