use chrono::NaiveDate;
use core_types::Transaction;
use tracing::debug;

use crate::error::DatasetError;

/// Returns the rows whose `order_date` falls inside the inclusive
/// `[start, end]` window, comparing on the date component only.
///
/// The aggregation layer assumes a validated range, so the bounds are
/// checked here, at the boundary where they arrive from the caller.
pub fn filter_by_date_range(
    rows: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Transaction>, DatasetError> {
    if start > end {
        return Err(DatasetError::InvalidRange { start, end });
    }

    let filtered: Vec<Transaction> = rows
        .iter()
        .filter(|row| {
            let day = row.order_date.date();
            day >= start && day <= end
        })
        .cloned()
        .collect();

    debug!(
        selected = filtered.len(),
        total = rows.len(),
        %start,
        %end,
        "applied date range filter"
    );
    Ok(filtered)
}

/// The observed min/max order dates of the dataset, used by callers to
/// default and clamp the filter window. `None` for an empty dataset.
pub fn date_bounds(rows: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let first = rows.iter().map(|row| row.order_date.date()).min()?;
    let last = rows.iter().map(|row| row.order_date.date()).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(order_id: &str, date: &str) -> Transaction {
        Transaction {
            customer_id: "C1".to_string(),
            order_id: order_id.to_string(),
            order_date: date.parse().unwrap(),
            delivery_date: None,
            product_name: "Widget".to_string(),
            quantity: 1,
            total_price: dec!(10.00),
            gender: core_types::Gender::Female,
            age_group: core_types::AgeGroup::Adults,
            state: "Queensland".to_string(),
        }
    }

    fn day(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let rows = vec![
            row("O1", "2024-01-01T08:00:00"),
            row("O2", "2024-01-02T23:59:59"),
            row("O3", "2024-01-03T00:00:00"),
        ];
        let kept = filter_by_date_range(&rows, day("2024-01-01"), day("2024-01-02")).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.order_id != "O3"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let rows = vec![row("O1", "2024-01-01T08:00:00")];
        let err = filter_by_date_range(&rows, day("2024-02-01"), day("2024-01-01")).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRange { .. }));
    }

    #[test]
    fn bounds_of_empty_dataset_are_none() {
        assert!(date_bounds(&[]).is_none());
        let rows = vec![
            row("O1", "2024-01-05T08:00:00"),
            row("O2", "2024-01-02T08:00:00"),
        ];
        assert_eq!(
            date_bounds(&rows).unwrap(),
            (day("2024-01-02"), day("2024-01-05"))
        );
    }
}
