//! # Vantage Dataset Crate
//!
//! This crate is the application's only door to the transaction file on
//! disk. It reads the delimited source data into typed `Transaction` rows
//! and applies the user-chosen date window before anything downstream runs.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** All file-format and parsing concerns live here.
//!   The rest of the application only ever sees `Vec<Transaction>`.
//! - **Validate Once:** Every row is deserialized into the fixed
//!   `Transaction` schema at load time. Aggregations never re-validate.
//!
//! ## Public API
//!
//! - `load_transactions`: Reads and sorts the dataset from a CSV file.
//! - `filter_by_date_range`: Applies the inclusive `[start, end]` window.
//! - `date_bounds`: The observed min/max order dates, for defaulting the window.
//! - `DatasetError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod filter;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use filter::{date_bounds, filter_by_date_range};
pub use loader::{load_transactions, read_transactions};
