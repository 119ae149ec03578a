use core_types::{CoreError, CurrencyCode, ExchangeRateTable, Record};

/// Converts quantities of any traded good into the reference currency (EUR).
///
/// The rate table is handed in explicitly and never changes afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyNormalizer {
    rates: ExchangeRateTable,
}

impl CurrencyNormalizer {
    pub fn new(rates: ExchangeRateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    /// `quantity / rate[code]`.
    pub fn normalize(&self, quantity: f64, code: CurrencyCode) -> f64 {
        quantity / self.rates.rate(code)
    }

    /// Normalizes a quantity tagged with a raw currency code.
    ///
    /// An unrecognized code leaves the quantity unmodified. This mirrors how the
    /// simulation output has always been charted; a warning is logged so the
    /// affected points can be traced, but the value itself is not rejected.
    pub fn normalize_code(&self, quantity: f64, code: &str) -> f64 {
        match code.parse::<CurrencyCode>() {
            Ok(code) => self.normalize(quantity, code),
            Err(_) => {
                tracing::warn!(code, quantity, "Unrecognized currency code, quantity left unnormalized.");
                quantity
            }
        }
    }

    /// Reads a quantity and its currency code from a record and normalizes it.
    pub fn to_reference(
        &self,
        record: &Record,
        quantity_field: &str,
        code_field: &str,
    ) -> Result<f64, CoreError> {
        let quantity = record.number(quantity_field)?;
        let code = record.text(code_field)?;
        Ok(self.normalize_code(quantity, code))
    }

    /// The per-currency holdings of a snapshot record (one field per code),
    /// each normalized to EUR, in canonical currency order.
    pub fn holdings_in_reference(&self, record: &Record) -> Result<[f64; 4], CoreError> {
        let mut holdings = [0.0; 4];
        for (slot, code) in holdings.iter_mut().zip(CurrencyCode::ALL) {
            *slot = self.normalize(record.number(code.as_str())?, code);
        }
        Ok(holdings)
    }

    /// Total value of a snapshot record in EUR.
    pub fn total_in_reference(&self, record: &Record) -> Result<f64, CoreError> {
        Ok(self.holdings_in_reference(record)?.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalizer() -> CurrencyNormalizer {
        CurrencyNormalizer::new(ExchangeRateTable::DEFAULT)
    }

    #[test]
    fn test_reference_currency_is_identity() {
        let n = normalizer();
        for q in [0.0, 1.0, 99.99, 123456.789] {
            assert_eq!(n.normalize(q, CurrencyCode::Eur), q);
            assert_eq!(n.normalize_code(q, "eur"), q);
        }
    }

    #[test]
    fn test_divides_by_rate() {
        let n = normalizer();
        for code in CurrencyCode::ALL {
            let rate = ExchangeRateTable::DEFAULT.rate(code);
            assert_eq!(n.normalize(250.0, code), 250.0 / rate);
            assert_eq!(n.normalize_code(250.0, code.as_str()), 250.0 / rate);
        }
    }

    #[test]
    fn test_usd_example() {
        let value = normalizer().normalize_code(100.0, "usd");
        assert!((value - 96.55).abs() < 0.01);
        assert_eq!(value, 100.0 / 1.03576);
    }

    #[test]
    fn test_unrecognized_code_passes_through() {
        let n = normalizer();
        assert_eq!(n.normalize_code(42.0, "gbp"), 42.0);
        assert_eq!(n.normalize_code(42.0, "USD"), 42.0);
    }

    #[test]
    fn test_to_reference_reads_record() {
        let record: Record =
            serde_json::from_value(json!({"quantity": 143.615, "good_type": "yen"})).unwrap();
        let value = normalizer().to_reference(&record, "quantity", "good_type").unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_reference_missing_code() {
        let record: Record = serde_json::from_value(json!({"quantity": 1.0})).unwrap();
        let err = normalizer().to_reference(&record, "quantity", "good_type").unwrap_err();
        assert_eq!(err, CoreError::MissingField("good_type".to_string()));
    }

    #[test]
    fn test_snapshot_holdings_and_total() {
        let record: Record = serde_json::from_value(json!({
            "index": 0, "eur": 10.0, "usd": 10.3576, "yen": 1436.15, "yuan": 73.599
        }))
        .unwrap();

        let n = normalizer();
        let holdings = n.holdings_in_reference(&record).unwrap();
        for h in holdings {
            assert!((h - 10.0).abs() < 1e-9);
        }
        assert!((n.total_in_reference(&record).unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_rates_are_used() {
        let rates = ExchangeRateTable::new(1.0, 2.0, 100.0, 8.0).unwrap();
        let n = CurrencyNormalizer::new(rates);
        assert_eq!(n.normalize(10.0, CurrencyCode::Usd), 5.0);
        assert_eq!(n.rates().rate(CurrencyCode::Yuan), 8.0);
    }
}
