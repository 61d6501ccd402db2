use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar day of order activity.
///
/// `order_count` deduplicates on `order_id`, so it may be smaller than the
/// number of line items that fell on the day. Days with no activity are
/// omitted from the table rather than zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrdersRow {
    pub day: NaiveDate,
    pub order_count: u64,
    pub revenue: Decimal,
}

/// Total units sold for one product across the filtered range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTotalsRow {
    pub product_name: String,
    pub quantity: u64,
}

/// One category of a demographic breakdown (gender, age group or state).
///
/// `customer_count` (distinct customers) is the canonical value;
/// `row_count` (raw line items) is carried alongside under its own name so
/// the two semantics are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicCountRow {
    pub category: String,
    pub customer_count: u64,
    pub row_count: u64,
}

/// The recency/frequency/monetary score of one customer.
///
/// Recency is measured in whole days from the customer's last order to the
/// most recent order date in the filtered range, so the freshest customer
/// scores 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmRow {
    pub customer_id: String,
    pub recency_days: i64,
    pub frequency: u64,
    pub monetary: Decimal,
}
