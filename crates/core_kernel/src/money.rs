//! Money with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! The reimbursement domain carries a single implicit currency, so `Money`
//! wraps a bare amount and enforces the one invariant claims rely on:
//! amounts are never negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

/// Errors that can occur when constructing money values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0} is negative")]
    Negative(Decimal),
}

/// A non-negative monetary amount
///
/// Amounts are rounded to 2 decimal places at construction. The non-negative
/// invariant holds both at construction and at deserialization, so a claim
/// deserialized from a request body can never carry a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rejecting negative amounts
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount.round_dp(2)))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::new(cents as i64, 2))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    // Sums of non-negative amounts stay non-negative, so plain addition
    // cannot violate the invariant.
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50)).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_rejects_negative() {
        let result = Money::new(dec!(-1.00));
        assert_eq!(result, Err(MoneyError::Negative(dec!(-1.00))));
    }

    #[test]
    fn test_money_rounds_to_cents() {
        let m = Money::new(dec!(10.005)).unwrap();
        assert_eq!(m.amount(), dec!(10.00));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(dec!(100.00)).unwrap();
        let b = Money::new(dec!(50.00)).unwrap();
        assert_eq!((a + b).amount(), dec!(150.00));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_cents(150), Money::from_cents(75), Money::zero()]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), dec!(2.25));
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(75)).unwrap();
        assert_eq!(m.to_string(), "$75.00");
    }

    #[test]
    fn test_money_deserialization_rejects_negative() {
        let result: Result<Money, _> = serde_json::from_str("-5.00");
        assert!(result.is_err());
    }

    #[test]
    fn test_money_serde_round_trip() {
        let m = Money::new(dec!(45.00)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
