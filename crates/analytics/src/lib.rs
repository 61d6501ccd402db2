//! # Vantage Analytics Engine
//!
//! This crate turns a filtered slice of transaction rows into the derived
//! summary tables the dashboard displays. It is the analytical heart of the
//! system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   files, terminals, or configuration. It depends only on `core-types`
//!   (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. Every method takes the (already filtered) transaction rows
//!   as input and produces one derived table as output; no method depends on
//!   another's result. This makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the aggregation logic.
//! - `DailyOrdersRow`, `ProductTotalsRow`, `DemographicCountRow`, `RfmRow`:
//!   The standardized derived-table rows handed to the presentation layer.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod tables;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use tables::{DailyOrdersRow, DemographicCountRow, ProductTotalsRow, RfmRow};
