use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money type for installment amounts, rounded to 8 decimal places
///
/// Serialized as a plain json number so catalog records round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from integer amount (dollars, reais, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// installment value times number of installments, `None` on overflow
    pub fn checked_mul(self, count: u32) -> Option<Money> {
        self.0
            .checked_mul(Decimal::from(count))
            .map(|total| Money(total.round_dp(8)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// interest rate as published on the offer, in percent per period
///
/// `Rate::new(dec!(1.99))` is 1.99% per installment period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from a percentage value (e.g., 1.99 for 1.99%)
    pub fn new(percentage: Decimal) -> Self {
        Rate(percentage)
    }

    /// get as published percentage
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// no-interest plans carry a rate of exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_decimal(dec!(100.123456789));
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_money_times_count() {
        let value = Money::from_decimal(dec!(33.33));
        assert_eq!(value.checked_mul(3), Some(Money::from_decimal(dec!(99.99))));
        assert_eq!(value.checked_mul(0), Some(Money::ZERO));
    }

    #[test]
    fn test_money_times_count_overflow() {
        assert_eq!(Money::from_decimal(Decimal::MAX).checked_mul(10), None);
    }

    #[test]
    fn test_zero_rate_with_scale() {
        // "0.00" from a catalog is still a no-interest plan
        assert!(Rate::new(dec!(0.00)).is_zero());
        assert!(!Rate::new(dec!(0.01)).is_zero());
    }

    #[test]
    fn test_json_numbers() {
        let rate: Rate = serde_json::from_str("1.99").unwrap();
        assert_eq!(rate, Rate::new(dec!(1.99)));

        let money: Money = serde_json::from_str("100").unwrap();
        assert_eq!(money, Money::from_major(100));
        assert_eq!(serde_json::to_string(&money).unwrap(), "100.0");
    }
}
