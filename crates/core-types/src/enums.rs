use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The goods traded by the simulator. EUR is the reference currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyCode {
    Eur,
    Usd,
    Yen,
    Yuan,
}

impl CurrencyCode {
    /// Canonical order, matching the column order of market and trader snapshots.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Eur,
        CurrencyCode::Usd,
        CurrencyCode::Yen,
        CurrencyCode::Yuan,
    ];

    /// The lowercase code used as a field name and `good_type` value in the JSON documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "eur",
            CurrencyCode::Usd => "usd",
            CurrencyCode::Yen => "yen",
            CurrencyCode::Yuan => "yuan",
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, CurrencyCode::Eur)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eur" => Ok(CurrencyCode::Eur),
            "usd" => Ok(CurrencyCode::Usd),
            "yen" => Ok(CurrencyCode::Yen),
            "yuan" => Ok(CurrencyCode::Yuan),
            _ => Err(CoreError::UnknownCurrency(s.to_string())),
        }
    }
}
