use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;

/// Number of fractional digits a GBP amount may carry (pence).
pub const PENCE_SCALE: u32 = 2;

/// A positive monetary amount in pounds sterling.
///
/// Wraps `rust_decimal::Decimal` so that transaction amounts are always
/// positive and never carry sub-pence precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO && value.normalize().scale() <= PENCE_SCALE {
            Ok(Self(value))
        } else {
            Err(BankError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Sum<Amount> for Decimal {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, |acc, amount| acc + amount.0)
    }
}

/// Major units with exactly two decimals, e.g. `100.00`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Formats a sum of money in en-GB currency style, e.g. `£1,234.50`.
pub fn format_gbp(value: impl Into<Decimal>) -> String {
    let plain = format!("{:.2}", value.into());
    let (whole, pence) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("£{grouped}.{pence}")
}
