// Pipeline entry point: the fixed Extract -> Transform -> Load sequence
// with milestone logging. Runs start to finish exactly once; every
// failure is fatal and propagates to the caller.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::PipelineConfig;
use crate::extract::extract;
use crate::load::{load_to_db, write_csv};
use crate::logger::log_progress;
use crate::query::verification_queries;
use crate::transform::{transform, RateTable};

pub fn run(config: &PipelineConfig) -> Result<()> {
    let log = |message: &str| log_progress(&config.log_path, message);

    log("Preliminaries complete. Initiating ETL process")?;
    let raw = extract(&config.source_url)?;

    log("Data extraction complete. Initiating Transformation process")?;
    let rates = RateTable::from_csv(&config.rate_table_path)?;
    let records = transform(raw, &rates)?;

    log("Data transformation complete. Initiating loading process")?;
    write_csv(&records, &config.output_csv_path)?;
    log("Data saved to CSV file")?;

    // Connection is scoped to this function; it is released on every
    // exit path, including the error ones.
    let conn = Connection::open(&config.db_path).with_context(|| {
        format!("Failed to open database {}", config.db_path.display())
    })?;
    log("SQL Connection initiated.")?;

    load_to_db(&conn, &config.table_name, &records)?;
    log("Data loaded to Database as table. Running the query")?;

    for output in verification_queries(&conn, &config.table_name)? {
        println!("{output}");
    }

    log("Process Complete.")?;

    conn.close()
        .map_err(|(_, e)| e)
        .context("Failed to close database connection")?;

    Ok(())
}
