//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of their currency to avoid
//! floating-point precision issues. The shop's reference currency (XAF)
//! happens to carry zero decimal places, but decimal places are a
//! per-currency property and nothing here assumes zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currencies the shop can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Central African CFA franc.
    #[default]
    XAF,
    USD,
    EUR,
    /// Nigerian naira.
    NGN,
}

impl Currency {
    /// Get the currency code (e.g. "XAF").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::XAF => "XAF",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::NGN => "NGN",
        }
    }

    /// Get the currency symbol (e.g. "₣").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::XAF => "\u{20a3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::NGN => "\u{20a6}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::XAF => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "XAF" => Some(Currency::XAF),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "NGN" => Some(Currency::NGN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is in the smallest unit of the currency (e.g. cents for
/// USD, whole francs for XAF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from an amount in minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use boutique_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_minor, 4999);
    /// assert_eq!(Money::from_decimal(25000.0, Currency::XAF).amount_minor, 25000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format for display, amount first and symbol after, the way the
    /// shop prints receipts (e.g. "25,000 ₣" or "49.99 $").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.abs();
        if places == 0 {
            format!("{sign}{} {}", group_digits(abs), self.currency.symbol())
        } else {
            let divisor = 10_i64.pow(places);
            format!(
                "{sign}{}.{:0width$} {}",
                group_digits(abs / divisor),
                abs % divisor,
                self.currency.symbol(),
                width = places as usize
            )
        }
    }

    /// Try to add, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|v| Money::new(v, self.currency))
    }

    /// Try to subtract, returning None on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|v| Money::new(v, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|v| Money::new(v, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest
    /// minor unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_minor as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Try to sum an iterator of Money values in the given currency.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` for
    /// fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_subtract` for
    /// fallible subtraction.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use `try_multiply` for fallible multiplication.
    fn mul(self, factor: i64) -> Money {
        self.try_multiply(factor).expect("Overflow in multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an absolute amount's digits in threes ("85000" -> "85,000").
fn group_digits(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
