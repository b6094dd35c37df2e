use crate::error::CrossBorderError;
use std::{fmt, str::FromStr};

/// Number of stroops in one lumen.
pub const STROOPS_PER_XLM: i64 = 10_000_000;

const DECIMALS: usize = 7;

/// A native asset amount, stored in stroops.
///
/// Parsed from the decimal notation used on the command line (`"10"`,
/// `"0.5"`, `"12.0000001"`). At most seven fractional digits are accepted,
/// matching the precision of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    pub fn from_stroops(stroops: i64) -> Self {
        Self(stroops)
    }

    pub fn stroops(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Amount {
    type Err = CrossBorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CrossBorderError::InvalidAmount(format!("'{}'", s));

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > DECIMALS {
            return Err(CrossBorderError::InvalidAmount(format!(
                "'{}' has more than {} decimal places",
                s, DECIMALS
            )));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", fraction, width = DECIMALS)
                .parse()
                .map_err(|_| invalid())?
        };

        whole
            .checked_mul(STROOPS_PER_XLM)
            .and_then(|stroops| stroops.checked_add(fraction))
            .map(Self)
            .ok_or_else(|| CrossBorderError::InvalidAmount(format!("'{}' is too large", s)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / STROOPS_PER_XLM as u64;
        let fraction = abs % STROOPS_PER_XLM as u64;

        if fraction == 0 {
            return write!(f, "{}{}", sign, whole);
        }

        let fraction = format!("{:0width$}", fraction, width = DECIMALS);
        write!(f, "{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }
}
