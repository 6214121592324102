//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use ethnum::U256;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::ValidationError;

/// Number of decimal places between ether and wei.
pub const ETHER_DECIMALS: usize = 18;
pub const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

/// Buyers pay the listed price plus 25%, expressed as `numerator / denominator`.
pub const MARKUP_NUMERATOR: u64 = 5;
pub const MARKUP_DENOMINATOR: u64 = 4;

/// An amount in the smallest currency unit (wei).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, SerializeDisplay, DeserializeFromStr)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Self = Self(U256::ZERO);

    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    pub fn from_wei(wei: u128) -> Self {
        Self(U256::new(wei))
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }

    pub fn checked_mul(self, quantity: u64) -> Option<Self> {
        self.0.checked_mul(U256::from(quantity)).map(Self)
    }

    /// Applies the buyer markup with truncating integer division.
    pub fn checked_with_markup(self) -> Option<Self> {
        self.0
            .checked_mul(U256::from(MARKUP_NUMERATOR))
            .map(|v| Self(v / U256::from(MARKUP_DENOMINATOR)))
    }

    /// Parses a human readable ether value (e.g. `0.5`) into wei. The value must be strictly positive and must not
    /// have more than 18 fractional digits.
    pub fn from_ether_str(s: &str) -> Result<Self, ValidationError> {
        let value = parse_plain_decimal(s).ok_or(ValidationError::InvalidListerPrice)?;
        if value <= BigDecimal::from(0u64) {
            return Err(ValidationError::InvalidListerPrice);
        }
        let wei = value * BigDecimal::from(WEI_PER_ETHER);
        if !wei.is_integer() {
            return Err(ValidationError::ListerPriceTooPrecise);
        }
        let (digits, _) = wei.with_scale(0).into_bigint_and_exponent();
        U256::from_str_radix(&digits.to_string(), 10)
            .map(Self)
            .map_err(|_| ValidationError::AmountOverflow)
    }

    /// Formats the amount in ether, always with at least one fractional digit (`1.0`, `0.5`, `1.25`).
    pub fn to_ether_string(&self) -> String {
        let unit = U256::from(WEI_PER_ETHER);
        let whole = self.0 / unit;
        // Always < 10^18 so it fits in a u64
        let fraction = (self.0 % unit).as_u64();
        let fraction = format!("{:0width$}", fraction, width = ETHER_DECIMALS);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            format!("{}.0", whole)
        } else {
            format!("{}.{}", whole, fraction)
        }
    }
}

impl From<u64> for Amount {
    fn from(wei: u64) -> Self {
        Self(U256::from(wei))
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| AmountParseError(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid amount '{0}'")]
pub struct AmountParseError(String);

/// Parses an unsigned decimal written out in full (`12`, `0.5`). Exponent notation is refused because `BigDecimal`
/// expands it to every digit, so a short input like `1e999999999` would never finish.
pub(crate) fn parse_plain_decimal(s: &str) -> Option<BigDecimal> {
    static PLAIN_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid regex"));
    let s = s.trim();
    if !PLAIN_DECIMAL.is_match(s) {
        return None;
    }
    BigDecimal::from_str(s).ok()
}
