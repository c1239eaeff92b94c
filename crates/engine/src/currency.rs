use std::str::FromStr;

use api_types::Money;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency used to display amounts.
///
/// The API carries bare numbers; the currency is a display preference chosen
/// in the client configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(EngineError::UnknownCurrency(other.to_string())),
        }
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}

/// Renders an amount the way an en-US locale shows currency.
///
/// The sign goes before the symbol and thousands are grouped with commas:
/// `-$1,234.56`.
#[must_use]
pub fn format_currency(amount: Money, currency: Currency) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.cents().unsigned_abs();
    let units = group_thousands(abs / 100);
    format!("{sign}{}{units}.{:02}", currency.symbol(), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
