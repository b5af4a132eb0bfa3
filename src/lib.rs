// Largest Banks ETL - Core Library
// Extract -> Transform -> Load pipeline for the "largest banks by market
// capitalization" table, with CSV and SQLite sinks.

pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod logger;
pub mod pipeline;
pub mod query;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::EtlError;
pub use extract::{extract, fetch_page, parse_bank_table};
pub use load::{load_to_db, write_csv};
pub use logger::log_progress;
pub use query::{run_query, verification_queries, QueryOutput};
pub use transform::{transform, RateTable};
pub use types::{BankRecord, RawBankRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
