// Transformation stage: coerce the USD column to float and derive the
// GBP/EUR/INR columns from the exchange-rate table.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::EtlError;
use crate::types::{BankRecord, RawBankRecord};

/// Currency code -> rate relative to USD, loaded once per run.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,

    #[serde(rename = "Rate")]
    rate: f64,
}

impl RateTable {
    /// Load a two-column (Currency, Rate) CSV with a header row.
    pub fn from_csv(path: &Path) -> Result<Self, EtlError> {
        let mut rdr = csv::Reader::from_path(path).map_err(|e| {
            EtlError::Parse(format!("cannot open rate table {}: {e}", path.display()))
        })?;

        let mut rates = HashMap::new();
        for row in rdr.deserialize() {
            let row: RateRow = row.map_err(|e| {
                EtlError::Parse(format!("bad row in rate table {}: {e}", path.display()))
            })?;
            rates.insert(row.currency, row.rate);
        }

        Ok(RateTable { rates })
    }

    /// Look up a rate; a missing code is fatal.
    pub fn rate(&self, code: &str) -> Result<f64, EtlError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| EtlError::MissingRate(code.to_string()))
    }
}

/// Round half away from zero to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Enrich raw records with the three derived currency columns.
///
/// Pure over its inputs; the only earlier side effect is the rate-table
/// read in [`RateTable::from_csv`]. Rates are resolved once before the
/// per-record loop so a missing code fails before any conversion.
pub fn transform(
    raw: Vec<RawBankRecord>,
    rates: &RateTable,
) -> Result<Vec<BankRecord>, EtlError> {
    let gbp = rates.rate("GBP")?;
    let eur = rates.rate("EUR")?;
    let inr = rates.rate("INR")?;

    raw.into_iter()
        .map(|record| {
            let trimmed = record.mc_usd_billion.trim();
            let usd: f64 = trimmed.parse().map_err(|e| EtlError::Conversion {
                value: record.mc_usd_billion.clone(),
                source: e,
            })?;

            Ok(BankRecord {
                rank: record.rank,
                bank_name: record.bank_name,
                mc_usd_billion: usd,
                mc_gbp_billion: round2(usd * gbp),
                mc_eur_billion: round2(usd * eur),
                mc_inr_billion: round2(usd * inr),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_rates() -> RateTable {
        let mut rates = HashMap::new();
        rates.insert("GBP".to_string(), 0.8);
        rates.insert("EUR".to_string(), 0.93);
        rates.insert("INR".to_string(), 82.5);
        RateTable { rates }
    }

    #[test]
    fn derives_all_three_currency_columns() {
        // The reference scenario: 100 USD billion at GBP 0.8 / EUR 0.93 / INR 82.5
        let raw = vec![RawBankRecord::new("1", "Test Bank", "100.00")];

        let records = transform(raw, &test_rates()).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.rank, "1");
        assert_eq!(r.bank_name, "Test Bank");
        assert!((r.mc_usd_billion - 100.0).abs() < 1e-9);
        assert!((r.mc_gbp_billion - 80.0).abs() < 1e-9);
        assert!((r.mc_eur_billion - 93.0).abs() < 1e-9);
        assert!((r.mc_inr_billion - 8250.0).abs() < 1e-9);
    }

    #[test]
    fn rounds_derived_values_to_two_decimals() {
        let raw = vec![RawBankRecord::new("1", "Rounding Bank", "432.92")];

        let records = transform(raw, &test_rates()).unwrap();

        let r = &records[0];
        // 432.92 * 0.93 = 402.6156 -> 402.62
        assert!((r.mc_eur_billion - 402.62).abs() < 1e-9);
        // 432.92 * 0.8 = 346.336 -> 346.34
        assert!((r.mc_gbp_billion - 346.34).abs() < 1e-9);
    }

    #[test]
    fn trims_usd_text_before_parsing() {
        let raw = vec![RawBankRecord::new("1", "Padded Bank", "  50.5 ")];
        let records = transform(raw, &test_rates()).unwrap();
        assert!((records[0].mc_usd_billion - 50.5).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_capitalization_is_fatal() {
        let raw = vec![RawBankRecord::new("1", "Bad Bank", "n/a")];
        let err = transform(raw, &test_rates()).unwrap_err();
        match err {
            EtlError::Conversion { value, .. } => assert_eq!(value, "n/a"),
            other => panic!("expected Conversion error, got {other:?}"),
        }
    }

    #[test]
    fn missing_currency_code_is_fatal() {
        let mut rates = HashMap::new();
        rates.insert("GBP".to_string(), 0.8);
        // EUR and INR absent
        let rates = RateTable { rates };

        let raw = vec![RawBankRecord::new("1", "Test Bank", "100.00")];
        let err = transform(raw, &rates).unwrap_err();
        match err {
            EtlError::MissingRate(code) => assert_eq!(code, "EUR"),
            other => panic!("expected MissingRate error, got {other:?}"),
        }
    }

    #[test]
    fn loads_rate_table_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Currency,Rate").unwrap();
        writeln!(file, "GBP,0.8").unwrap();
        writeln!(file, "EUR,0.93").unwrap();
        writeln!(file, "INR,82.5").unwrap();
        file.flush().unwrap();

        let rates = RateTable::from_csv(file.path()).unwrap();

        assert!((rates.rate("GBP").unwrap() - 0.8).abs() < 1e-9);
        assert!((rates.rate("EUR").unwrap() - 0.93).abs() < 1e-9);
        assert!((rates.rate("INR").unwrap() - 82.5).abs() < 1e-9);
        assert!(matches!(rates.rate("JPY"), Err(EtlError::MissingRate(_))));
    }

    #[test]
    fn unreadable_rate_table_is_a_parse_error() {
        let err = RateTable::from_csv(Path::new("/nonexistent/rates.csv")).unwrap_err();
        assert!(matches!(err, EtlError::Parse(_)));
    }

    #[test]
    fn round2_half_away_from_zero() {
        assert!((round2(1.234) - 1.23).abs() < 1e-9);
        assert!((round2(1.235) - 1.24).abs() < 1e-9);
        assert!((round2(-1.235) - (-1.24)).abs() < 1e-9);
        assert!((round2(100.0) - 100.0).abs() < 1e-9);
    }
}
