use crate::enums::CurrencyCode;
use crate::error::CoreError;
use serde::Serialize;

/// Static exchange rates, expressed as units of a currency per 1 EUR.
///
/// The table is immutable once built. `new` enforces the invariants: the
/// reference currency maps to exactly `1.0`, and every rate is finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeRateTable {
    eur: f64,
    usd: f64,
    yen: f64,
    yuan: f64,
}

impl ExchangeRateTable {
    /// The rates the simulator was run with.
    pub const DEFAULT: ExchangeRateTable = ExchangeRateTable {
        eur: 1.0,
        usd: 1.03576,
        yen: 143.615,
        yuan: 7.3599,
    };

    pub fn new(eur: f64, usd: f64, yen: f64, yuan: f64) -> Result<Self, CoreError> {
        if eur != 1.0 {
            return Err(CoreError::InvalidRate(
                CurrencyCode::Eur.to_string(),
                format!("reference currency must map to 1.0, got {eur}"),
            ));
        }

        let table = Self { eur, usd, yen, yuan };
        for (code, rate) in table.iter() {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CoreError::InvalidRate(
                    code.to_string(),
                    format!("rate must be a positive finite number, got {rate}"),
                ));
            }
        }

        Ok(table)
    }

    pub fn rate(&self, code: CurrencyCode) -> f64 {
        match code {
            CurrencyCode::Eur => self.eur,
            CurrencyCode::Usd => self.usd,
            CurrencyCode::Yen => self.yen,
            CurrencyCode::Yuan => self.yuan,
        }
    }

    /// Iterates `(code, rate)` pairs in canonical currency order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
        CurrencyCode::ALL.into_iter().map(|code| (code, self.rate(code)))
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
