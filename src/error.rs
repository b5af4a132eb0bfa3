use thiserror::Error;

/// Closed set of fatal pipeline faults.
///
/// The pipeline never recovers from any of these; they exist so the
/// diagnostics name the stage that failed instead of a bare index or
/// parse panic.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Network failure or non-success HTTP status from the source page.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source page or rate table does not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A market-capitalization cell was not numeric after trimming.
    #[error("non-numeric market capitalization {value:?}")]
    Conversion {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The rate table has no row for an expected currency code.
    #[error("rate table has no entry for currency {0}")]
    MissingRate(String),

    /// A write to the CSV file or the database failed.
    #[error("failed to write to {sink}")]
    Persist {
        sink: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EtlError {
    pub(crate) fn persist(
        sink: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        EtlError::Persist {
            sink: sink.to_string(),
            source: Box::new(source),
        }
    }
}
