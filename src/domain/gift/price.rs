// SPDX-License-Identifier: MPL-2.0
//! Gift price value object.
//!
//! Prices are stored as whole cents so tier comparisons and formatting never
//! suffer from floating-point drift. The hosted store exposes prices as plain
//! numbers in reais; conversion happens once at the boundary.

use std::fmt;

/// Price in Brazilian Real, stored in cents.
///
/// # Example
///
/// ```
/// use gift_registry::domain::gift::Price;
///
/// let price = Price::from_cents(123_456);
/// assert_eq!(price.to_string(), "R$\u{a0}1.234,56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a price from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts an amount in reais, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, infinite or NaN amounts.
    #[must_use]
    pub fn from_reais(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents >= i64::MAX as f64 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let cents = cents as i64;
        Some(Self(cents))
    }

    /// Parses a price typed by a guest.
    ///
    /// Accepts the Brazilian notation (`1.234,56` or `1.234`), a plain
    /// decimal point (`1234.56`) and an optional `R$` prefix. Without a comma,
    /// dots that split the digits into groups of three are thousands
    /// separators. Returns `None` for anything else, including negative
    /// amounts.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = if trimmed.contains(',') {
            trimmed.replace('.', "").replace(',', ".")
        } else if is_grouped(trimmed) {
            trimmed.replace('.', "")
        } else {
            trimmed.to_string()
        };

        if !normalized.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }

        normalized.parse::<f64>().ok().and_then(Self::from_reais)
    }

    /// Returns the value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the value in reais, as sent to the store.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_reais(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// `1.234` or `12.345.678`: a leading group of one to three digits (no
/// leading zero) followed by dot-separated groups of exactly three.
fn is_grouped(digits: &str) -> bool {
    let mut groups = digits.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len())
        && !head.starts_with('0')
        && head.bytes().all(|b| b.is_ascii_digit());

    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for Price {
    /// Formats as Brazilian currency: `R$ 1.234,56` with a non-breaking space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}R$\u{a0}{grouped},{cents:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brazilian_currency() {
        assert_eq!(Price::from_cents(0).to_string(), "R$\u{a0}0,00");
        assert_eq!(Price::from_cents(5).to_string(), "R$\u{a0}0,05");
        assert_eq!(Price::from_cents(19_990).to_string(), "R$\u{a0}199,90");
        assert_eq!(Price::from_cents(123_456).to_string(), "R$\u{a0}1.234,56");
        assert_eq!(
            Price::from_cents(123_456_789).to_string(),
            "R$\u{a0}1.234.567,89"
        );
    }

    #[test]
    fn from_reais_rounds_to_nearest_cent() {
        assert_eq!(Price::from_reais(199.99), Some(Price::from_cents(19_999)));
        assert_eq!(Price::from_reais(0.1 + 0.2), Some(Price::from_cents(30)));
        assert_eq!(Price::from_reais(200.0), Some(Price::from_cents(20_000)));
    }

    #[test]
    fn from_reais_rejects_invalid_amounts() {
        assert_eq!(Price::from_reais(-1.0), None);
        assert_eq!(Price::from_reais(f64::NAN), None);
        assert_eq!(Price::from_reais(f64::INFINITY), None);
    }

    #[test]
    fn parse_accepts_common_notations() {
        assert_eq!(Price::parse("150"), Some(Price::from_cents(15_000)));
        assert_eq!(Price::parse("150,5"), Some(Price::from_cents(15_050)));
        assert_eq!(Price::parse("1.234,56"), Some(Price::from_cents(123_456)));
        assert_eq!(Price::parse("1234.56"), Some(Price::from_cents(123_456)));
        assert_eq!(Price::parse(" R$ 99,90 "), Some(Price::from_cents(9_990)));
    }

    #[test]
    fn parse_reads_dot_groups_as_thousands() {
        assert_eq!(Price::parse("1.234"), Some(Price::from_cents(123_400)));
        assert_eq!(Price::parse("R$ 12.500"), Some(Price::from_cents(1_250_000)));
        assert_eq!(Price::parse("1.234.567"), Some(Price::from_cents(123_456_700)));
        // Not a grouping: decimal point.
        assert_eq!(Price::parse("0.500"), Some(Price::from_cents(50)));
        assert_eq!(Price::parse("12.5"), Some(Price::from_cents(1_250)));
        assert_eq!(Price::parse("1234.567"), Some(Price::from_cents(123_457)));
        assert_eq!(Price::parse("1.234.5"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Price::parse(""), None);
        assert_eq!(Price::parse("R$"), None);
        assert_eq!(Price::parse("abc"), None);
        assert_eq!(Price::parse("-10"), None);
        assert_eq!(Price::parse("1e3"), None);
    }

    #[test]
    fn as_reais_matches_cents() {
        assert!((Price::from_cents(12_345).as_reais() - 123.45).abs() < f64::EPSILON);
    }
}
