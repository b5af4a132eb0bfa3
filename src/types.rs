use serde::{Deserialize, Serialize};

/// Raw row as scraped from the source table.
///
/// Everything is text at this stage; Rank stays text for good (it is an
/// ordinal label, never arithmetic), MC_USD_Billion is coerced by the
/// transform step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBankRecord {
    #[serde(rename = "Rank")]
    pub rank: String,

    #[serde(rename = "Bank_Name")]
    pub bank_name: String,

    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: String,
}

impl RawBankRecord {
    pub fn new(rank: &str, bank_name: &str, mc_usd_billion: &str) -> Self {
        RawBankRecord {
            rank: rank.to_string(),
            bank_name: bank_name.to_string(),
            mc_usd_billion: mc_usd_billion.to_string(),
        }
    }
}

/// Enriched record: the raw row plus the derived currency columns.
///
/// Built once by the transform step and read-only from there on; the
/// loader never mutates it. Column order here is the column order in
/// both sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(rename = "Rank")]
    pub rank: String,

    #[serde(rename = "Bank_Name")]
    pub bank_name: String,

    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,

    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,

    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,

    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}
