use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstateCalcError;

/// Display-side monetary values. Calculator math stays in `f64`.
pub type Money = Decimal;

/// Currencies a listing price can be shown in. Listing prices are stored in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayCurrency {
    #[default]
    USD,
    MYR,
    CNY,
}

impl DisplayCurrency {
    pub const ALL: [DisplayCurrency; 3] = [
        DisplayCurrency::USD,
        DisplayCurrency::MYR,
        DisplayCurrency::CNY,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::USD => "USD",
            DisplayCurrency::MYR => "MYR",
            DisplayCurrency::CNY => "CNY",
        }
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DisplayCurrency {
    type Err = EstateCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(DisplayCurrency::USD),
            "MYR" => Ok(DisplayCurrency::MYR),
            "CNY" | "RMB" => Ok(DisplayCurrency::CNY),
            other => Err(EstateCalcError::ParseError(format!(
                "Unknown currency '{other}'. Use: USD, MYR, CNY"
            ))),
        }
    }
}

/// Site language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl FromStr for Language {
    type Err = EstateCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" | "cn" => Ok(Language::Zh),
            other => Err(EstateCalcError::ParseError(format!(
                "Unknown language '{other}'. Use: en, zh"
            ))),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("myr".parse::<DisplayCurrency>().unwrap(), DisplayCurrency::MYR);
        assert_eq!(" Cny ".parse::<DisplayCurrency>().unwrap(), DisplayCurrency::CNY);
        assert!("EUR".parse::<DisplayCurrency>().is_err());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_lowercase() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
    }
}
