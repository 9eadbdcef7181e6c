use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Minimum support threshold, either relative to the number of transactions
/// or as an absolute transaction count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Fraction in `(0, 1]` of the scanned transactions, rounded up.
    Fraction(f64),
    /// Absolute number of transactions.
    Count(u64),
}

impl MinSupport {
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Fraction(fraction) if fraction > 0.0 && fraction <= 1.0 => Ok(self),
            Self::Count(count) if count > 0 => Ok(self),
            _ => Err(ConfigError::InvalidMinSupport(self.to_string())),
        }
    }

    /// Absolute threshold for a dataset of `num_transactions` transactions.
    pub fn resolve(self, num_transactions: u64) -> Result<u64, ConfigError> {
        Ok(match self.validate()? {
            Self::Fraction(fraction) => (fraction * num_transactions as f64).ceil() as u64,
            Self::Count(count) => count,
        })
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(fraction) => write!(f, "{fraction}"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for MinSupport {
    type Err = ConfigError;

    /// Values up to and including `1` are fractions, larger integral values
    /// are absolute counts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidMinSupport(s.to_owned());
        let s = s.trim();
        if let Ok(count) = s.parse::<u64>() {
            return match count {
                0 => Err(invalid()),
                1 => Ok(Self::Fraction(1.0)),
                _ => Ok(Self::Count(count)),
            };
        }
        let value: f64 = s.parse().map_err(|_| invalid())?;
        if value > 0.0 && value <= 1.0 {
            Ok(Self::Fraction(value))
        } else if value > 1.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
            Ok(Self::Count(value as u64))
        } else {
            Err(invalid())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningOptions {
    /// Longest itemset to report. `None` reports every frequent itemset.
    pub max_len: Option<usize>,
}

impl MiningOptions {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        match self.max_len {
            Some(0) => Err(ConfigError::InvalidMaxLen),
            _ => Ok(self),
        }
    }

    pub(crate) fn allows(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max_len| len <= max_len)
    }
}
