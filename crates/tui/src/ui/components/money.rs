use api_types::Money;
use engine::{Currency, Direction, format_currency};
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Amount colored by its sign, zero in the neutral text color.
#[must_use]
pub fn styled_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else if amount.is_zero() {
        theme.text
    } else {
        theme.positive
    };
    Span::styled(format_currency(amount, currency), Style::default().fg(color))
}

/// Magnitude of an outflow, in the negative color unless it is zero.
#[must_use]
pub fn outflow_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let magnitude = amount.abs();
    let color = if magnitude.is_zero() {
        theme.text
    } else {
        theme.negative
    };
    Span::styled(format_currency(magnitude, currency), Style::default().fg(color))
}

/// Arrow and color for a list row.
#[must_use]
pub fn direction_marker(direction: Direction, theme: &Theme) -> Span<'static> {
    match direction {
        Direction::Incoming => Span::styled("↑", Style::default().fg(theme.positive)),
        Direction::Outgoing => Span::styled("↓", Style::default().fg(theme.negative)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_picks_color() {
        let theme = Theme::default();
        let span = styled_amount(Money::new(-25_00), Currency::Usd, &theme);
        assert_eq!(span.content, "-$25.00");
        assert_eq!(span.style.fg, Some(theme.negative));

        let span = styled_amount(Money::new(1_234_56), Currency::Usd, &theme);
        assert_eq!(span.content, "$1,234.56");
        assert_eq!(span.style.fg, Some(theme.positive));

        let span = styled_amount(Money::ZERO, Currency::Eur, &theme);
        assert_eq!(span.style.fg, Some(theme.text));
    }

    #[test]
    fn outflow_shows_magnitude_in_negative_color() {
        let theme = Theme::default();
        let span = outflow_amount(Money::new(25_00), Currency::Usd, &theme);
        assert_eq!(span.content, "$25.00");
        assert_eq!(span.style.fg, Some(theme.negative));

        let span = outflow_amount(Money::new(-1_250_00), Currency::Usd, &theme);
        assert_eq!(span.content, "$1,250.00");

        let span = outflow_amount(Money::ZERO, Currency::Usd, &theme);
        assert_eq!(span.content, "$0.00");
        assert_eq!(span.style.fg, Some(theme.text));
    }
}
