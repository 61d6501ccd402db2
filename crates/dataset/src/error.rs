use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read the dataset file: {0}")]
    Read(#[from] csv::Error),

    #[error("Malformed row at record {record}: {source}")]
    MalformedRow {
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
