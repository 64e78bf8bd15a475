//! Numeric Coercion
//!
//! Slot values arrive as free text. Coercion never fails the request: bad
//! input becomes `NotANumber`, which compares false against everything,
//! multiplies to itself and prints as `nan`.

use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;
use std::ops::Mul;
use std::str::FromStr;

use rust_decimal::Decimal;

/// A coerced number, or the not-a-number sentinel
#[derive(Clone, Copy, Debug)]
pub enum Numeric<T> {
    Value(T),
    NotANumber,
}

impl<T> Numeric<T> {
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl<T: PartialEq> PartialEq<T> for Numeric<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, Self::Value(v) if v == other)
    }
}

impl<T: PartialOrd> PartialOrd<T> for Numeric<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        match self {
            Self::Value(v) => v.partial_cmp(other),
            Self::NotANumber => None,
        }
    }
}

impl Mul<Decimal> for Numeric<Decimal> {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        match self {
            Self::Value(v) => v.checked_mul(rhs).map_or(Self::NotANumber, Self::Value),
            Self::NotANumber => Self::NotANumber,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Numeric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => fmt::Display::fmt(v, f),
            Self::NotANumber => f.write_str("nan"),
        }
    }
}

/// Integer coercion. Well-formed integers past the `i64` range saturate.
pub fn parse_int(value: &str) -> Numeric<i64> {
    match value.trim().parse::<i64>() {
        Ok(v) => Numeric::Value(v),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Numeric::Value(i64::MAX),
            IntErrorKind::NegOverflow => Numeric::Value(i64::MIN),
            _ => Numeric::NotANumber,
        },
    }
}

/// Decimal coercion, accepting plain and scientific notation
pub fn parse_float(value: &str) -> Numeric<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_or(Numeric::NotANumber, Numeric::Value)
}
