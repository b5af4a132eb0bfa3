use std::path::PathBuf;

/// All paths and parameters for one pipeline run.
///
/// The original script kept these as module-level constants; an explicit
/// struct lets tests point the pipeline at fixtures and throwaway files
/// without touching globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Page holding the banks table.
    pub source_url: String,

    /// Two-column (Currency, Rate) CSV, rates relative to USD.
    pub rate_table_path: PathBuf,

    /// Flat-file sink.
    pub output_csv_path: PathBuf,

    /// SQLite database file.
    pub db_path: PathBuf,

    /// Table replaced on every run.
    pub table_name: String,

    /// Append-only progress log.
    pub log_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            source_url:
                "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks"
                    .to_string(),
            rate_table_path: PathBuf::from("./exchange_rate.csv"),
            output_csv_path: PathBuf::from("./market_capitalization.csv"),
            db_path: PathBuf::from("Banks.db"),
            table_name: "Largest_banks".to_string(),
            log_path: PathBuf::from("./code_log.txt"),
        }
    }
}
