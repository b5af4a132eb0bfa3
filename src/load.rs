// Load stage: write the final records to the flat file and to the
// SQLite table. Records are read-only here.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::EtlError;
use crate::types::BankRecord;

/// Column order shared by both sinks.
const COLUMNS: [&str; 6] = [
    "Rank",
    "Bank_Name",
    "MC_USD_Billion",
    "MC_GBP_Billion",
    "MC_EUR_Billion",
    "MC_INR_Billion",
];

/// Write all records to a CSV file, header included, with the positional
/// index as a leading column (empty header, matching a default
/// write-with-index).
pub fn write_csv(records: &[BankRecord], path: &Path) -> Result<(), EtlError> {
    let sink = path.display().to_string();
    let mut wtr = csv::Writer::from_path(path).map_err(|e| EtlError::persist(&sink, e))?;

    let mut header = vec![""];
    header.extend_from_slice(&COLUMNS);
    wtr.write_record(&header)
        .map_err(|e| EtlError::persist(&sink, e))?;

    for (idx, record) in records.iter().enumerate() {
        wtr.write_record(&[
            idx.to_string(),
            record.rank.clone(),
            record.bank_name.clone(),
            record.mc_usd_billion.to_string(),
            record.mc_gbp_billion.to_string(),
            record.mc_eur_billion.to_string(),
            record.mc_inr_billion.to_string(),
        ])
        .map_err(|e| EtlError::persist(&sink, e))?;
    }

    wtr.flush().map_err(|e| EtlError::persist(&sink, e))?;
    Ok(())
}

/// Replace `table_name` with a fresh table holding all records, in input
/// order. Returns the number of rows inserted.
pub fn load_to_db(
    conn: &Connection,
    table_name: &str,
    records: &[BankRecord],
) -> Result<usize, EtlError> {
    let sink = format!("table {table_name}");
    let persist = |e: rusqlite::Error| EtlError::persist(&sink, e);

    conn.execute(&format!("DROP TABLE IF EXISTS \"{table_name}\""), [])
        .map_err(persist)?;

    conn.execute(
        &format!(
            "CREATE TABLE \"{table_name}\" (
                \"Rank\" TEXT,
                \"Bank_Name\" TEXT,
                \"MC_USD_Billion\" REAL,
                \"MC_GBP_Billion\" REAL,
                \"MC_EUR_Billion\" REAL,
                \"MC_INR_Billion\" REAL
            )"
        ),
        [],
    )
    .map_err(persist)?;

    let mut inserted = 0;
    for record in records {
        conn.execute(
            &format!(
                "INSERT INTO \"{table_name}\" (
                    \"Rank\", \"Bank_Name\", \"MC_USD_Billion\",
                    \"MC_GBP_Billion\", \"MC_EUR_Billion\", \"MC_INR_Billion\"
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            ),
            params![
                record.rank,
                record.bank_name,
                record.mc_usd_billion,
                record.mc_gbp_billion,
                record.mc_eur_billion,
                record.mc_inr_billion,
            ],
        )
        .map_err(persist)?;
        inserted += 1;
    }

    Ok(inserted)
}
