use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use core_types::{AgeGroup, DemographicField, Transaction};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::AnalyticsError;
use crate::tables::{DailyOrdersRow, DemographicCountRow, ProductTotalsRow, RfmRow};

/// A stateless calculator for deriving summary tables from transaction rows.
///
/// Every method is a pure function of its input slice: the caller filters
/// the dataset to the chosen date range once and may then invoke the
/// aggregations in any order.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets rows into calendar days and computes, per day present in the
    /// input, the distinct order count and the summed revenue.
    ///
    /// The output is ordered ascending by day. Days with no rows are
    /// omitted; the presentation layer decides whether gaps need filling.
    pub fn daily_orders(&self, rows: &[Transaction]) -> Vec<DailyOrdersRow> {
        let mut days: BTreeMap<NaiveDate, (HashSet<&str>, Decimal)> = BTreeMap::new();

        for row in rows {
            let bucket = days.entry(row.order_date.date()).or_default();
            bucket.0.insert(row.order_id.as_str());
            bucket.1 += row.total_price;
        }

        debug!(days = days.len(), rows = rows.len(), "computed daily orders");
        days.into_iter()
            .map(|(day, (orders, revenue))| DailyOrdersRow {
                day,
                order_count: orders.len() as u64,
                revenue,
            })
            .collect()
    }

    /// Sums units sold per product, sorted descending by quantity.
    ///
    /// The sort is stable, so products tied on quantity keep the order in
    /// which they first appeared in the input. Callers typically take the
    /// top-k slice of the result.
    pub fn product_totals(&self, rows: &[Transaction]) -> Vec<ProductTotalsRow> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<ProductTotalsRow> = Vec::new();

        for row in rows {
            match index.get(row.product_name.as_str()) {
                Some(&at) => totals[at].quantity += row.quantity,
                None => {
                    index.insert(row.product_name.as_str(), totals.len());
                    totals.push(ProductTotalsRow {
                        product_name: row.product_name.clone(),
                        quantity: row.quantity,
                    });
                }
            }
        }

        totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        debug!(products = totals.len(), "computed product totals");
        totals
    }

    /// Breaks the customer base down by one demographic attribute.
    ///
    /// Each output row carries both the distinct-customer count (the
    /// canonical value) and the raw line-item count. Categories absent from
    /// the input produce no row. For `age_group` the rows come out in the
    /// fixed Youth, Adults, Seniors order; other fields keep first-encounter
    /// order.
    pub fn demographic_counts(
        &self,
        rows: &[Transaction],
        field: DemographicField,
    ) -> Vec<DemographicCountRow> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut customers: Vec<HashSet<&str>> = Vec::new();
        let mut counts: Vec<DemographicCountRow> = Vec::new();

        for row in rows {
            let category = match field {
                DemographicField::Gender => row.gender.to_string(),
                DemographicField::AgeGroup => row.age_group.to_string(),
                DemographicField::State => row.state.clone(),
            };
            let at = match index.get(&category) {
                Some(&at) => at,
                None => {
                    let at = counts.len();
                    index.insert(category.clone(), at);
                    customers.push(HashSet::new());
                    counts.push(DemographicCountRow {
                        category,
                        customer_count: 0,
                        row_count: 0,
                    });
                    at
                }
            };
            customers[at].insert(row.customer_id.as_str());
            counts[at].row_count += 1;
        }

        for (at, distinct) in customers.iter().enumerate() {
            counts[at].customer_count = distinct.len() as u64;
        }

        if field == DemographicField::AgeGroup {
            counts.sort_by_key(|row| {
                AgeGroup::ALL
                    .iter()
                    .position(|group| group.to_string() == row.category)
            });
        }

        debug!(%field, categories = counts.len(), "computed demographic counts");
        counts
    }

    /// Scores every customer in the input on recency, frequency and
    /// monetary value.
    ///
    /// Recency is anchored on the most recent order date across the whole
    /// input, so the computation is undefined for an empty slice and
    /// reports `NoDataInRange` instead of inventing a value. The output has
    /// exactly one row per distinct customer, ordered by `customer_id`.
    pub fn rfm(&self, rows: &[Transaction]) -> Result<Vec<RfmRow>, AnalyticsError> {
        let global_recent_date = rows
            .iter()
            .map(|row| row.order_date.date())
            .max()
            .ok_or(AnalyticsError::NoDataInRange)?;

        struct Accumulator<'a> {
            orders: HashSet<&'a str>,
            monetary: Decimal,
            last_order_date: NaiveDate,
        }

        let mut customers: BTreeMap<&str, Accumulator<'_>> = BTreeMap::new();
        for row in rows {
            let day = row.order_date.date();
            let acc = customers
                .entry(row.customer_id.as_str())
                .or_insert_with(|| Accumulator {
                    orders: HashSet::new(),
                    monetary: Decimal::ZERO,
                    last_order_date: day,
                });
            acc.orders.insert(row.order_id.as_str());
            acc.monetary += row.total_price;
            if day > acc.last_order_date {
                acc.last_order_date = day;
            }
        }

        debug!(customers = customers.len(), %global_recent_date, "computed RFM table");
        Ok(customers
            .into_iter()
            .map(|(customer_id, acc)| RfmRow {
                customer_id: customer_id.to_string(),
                recency_days: (global_recent_date - acc.last_order_date).num_days(),
                frequency: acc.orders.len() as u64,
                monetary: acc.monetary,
            })
            .collect())
    }
}
