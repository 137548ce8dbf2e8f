//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., won, not jeon).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a KRW price from a whole number of won.
    #[must_use]
    pub fn won(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency_code: CurrencyCode::KRW,
        }
    }

    /// Format for display (e.g., "₩1,290,000").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.currency_code.symbol(), group_thousands(self.amount))
    }
}

/// ISO 4217 currency codes used by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// South Korean won - the store's native currency.
    #[default]
    KRW,
    USD,
    EUR,
    JPY,
}

impl CurrencyCode {
    /// The currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::KRW => "\u{20a9}",
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
            Self::JPY => "\u{a5}",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::KRW => "KRW",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::JPY => "JPY",
        }
    }
}

/// Group the integer part of a decimal with thousands separators.
fn group_thousands(amount: Decimal) -> String {
    let rendered = amount.to_string();
    let (integer, fraction) = rendered
        .split_once('.')
        .map_or((rendered.as_str(), None), |(i, f)| (i, Some(f)));

    let (sign, digits) = integer
        .strip_prefix('-')
        .map_or(("", integer), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_constructor_uses_krw() {
        let price = Price::won(1_290_000);
        assert_eq!(price.currency_code, CurrencyCode::KRW);
        assert_eq!(price.amount, Decimal::new(1_290_000, 0));
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Price::won(1_290_000).display(), "\u{20a9}1,290,000");
        assert_eq!(Price::won(900).display(), "\u{20a9}900");
        assert_eq!(Price::won(0).display(), "\u{20a9}0");
    }

    #[test]
    fn display_keeps_fractional_part() {
        let price = Price::new(Decimal::new(1999_99, 2), CurrencyCode::USD);
        assert_eq!(price.display(), "$1,999.99");
    }
}
