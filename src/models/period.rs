//! Input periods and monthly normalization
//!
//! Users enter an amount together with the period it covers. Only the
//! monthly-equivalent value is ever stored.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The period a raw amount was entered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InputPeriod {
    #[default]
    #[serde(rename = "1 month")]
    OneMonth,
    #[serde(rename = "3 months")]
    ThreeMonths,
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "1 year")]
    OneYear,
}

impl InputPeriod {
    /// Get all periods in picker order
    pub fn all() -> &'static [Self] {
        &[Self::OneMonth, Self::ThreeMonths, Self::SixMonths, Self::OneYear]
    }

    /// Length of the period in months
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 month",
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
        }
    }

    /// Parse a period label; anything unrecognized means one month
    pub fn from_label(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        match normalized.as_str() {
            "3months" | "3month" | "3m" | "quarter" | "quarterly" => Self::ThreeMonths,
            "6months" | "6month" | "6m" | "halfyear" | "semiannual" => Self::SixMonths,
            "1year" | "year" | "yearly" | "annual" | "annually" | "12months" | "1y" | "12m" => {
                Self::OneYear
            }
            _ => Self::OneMonth,
        }
    }
}

impl fmt::Display for InputPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for InputPeriod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Convert an amount entered for `period` into its monthly equivalent
pub fn normalize(raw_value: f64, period: InputPeriod) -> f64 {
    raw_value / f64::from(period.months())
}

/// Round to two decimal places, the precision values are stored with
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_each_period() {
        assert_eq!(normalize(50.0, InputPeriod::OneMonth), 50.0);
        assert_eq!(normalize(90.0, InputPeriod::ThreeMonths), 30.0);
        assert_eq!(normalize(60.0, InputPeriod::SixMonths), 10.0);
        assert_eq!(normalize(120.0, InputPeriod::OneYear), 10.0);
    }

    #[test]
    fn test_normalize_inverts_period_length() {
        for period in InputPeriod::all() {
            for raw in [0.0, 1.0, 99.99, 1234.56] {
                let monthly = normalize(raw, *period);
                let restored = monthly * f64::from(period.months());
                assert!((restored - raw).abs() < 1e-9, "{:?} {}", period, raw);
            }
        }
    }

    #[test]
    fn test_unknown_period_is_identity() {
        let period = InputPeriod::from_label("unknown");
        assert_eq!(period, InputPeriod::OneMonth);
        assert_eq!(normalize(42.5, period), 42.5);
    }

    #[test]
    fn test_from_label_variants() {
        assert_eq!(InputPeriod::from_label("1 year"), InputPeriod::OneYear);
        assert_eq!(InputPeriod::from_label(" Yearly "), InputPeriod::OneYear);
        assert_eq!(InputPeriod::from_label("3 months"), InputPeriod::ThreeMonths);
        assert_eq!(InputPeriod::from_label("6m"), InputPeriod::SixMonths);
        assert_eq!("1 month".parse::<InputPeriod>().unwrap(), InputPeriod::OneMonth);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(100.0 / 3.0), 33.33);
        assert_eq!(round_to_cents(200.0 / 3.0), 66.67);
        assert_eq!(round_to_cents(15.0), 15.0);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&InputPeriod::SixMonths).unwrap();
        assert_eq!(json, "\"6 months\"");
    }
}
