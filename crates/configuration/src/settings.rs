use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dashboard: Dashboard,
}

/// Contains parameters for building a dashboard report.
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    /// Path to the delimited transaction file to analyze.
    pub data_path: PathBuf,
    /// How many rows the "top products" and RFM ranking tables show.
    pub top_products: usize,
    /// Optional default start of the report window. When absent, the
    /// dataset's earliest order date is used.
    pub start_date: Option<NaiveDate>,
    /// Optional default end of the report window. When absent, the
    /// dataset's latest order date is used.
    pub end_date: Option<NaiveDate>,
}
