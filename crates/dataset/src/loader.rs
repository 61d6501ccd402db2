use std::io::Read;
use std::path::Path;

use core_types::Transaction;
use tracing::info;

use crate::error::DatasetError;

/// Loads the transaction dataset from a CSV file on disk.
///
/// Rows are sorted ascending by `order_date` so downstream consumers see a
/// chronological stream, mirroring how the source file is meant to be read.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, DatasetError> {
    let reader = csv::Reader::from_path(path)?;
    let rows = collect_rows(reader)?;
    info!(rows = rows.len(), path = %path.display(), "loaded transaction dataset");
    Ok(rows)
}

/// Reads transactions from any byte stream with a CSV header line.
///
/// This is the in-memory counterpart of `load_transactions`, useful for
/// tests and for callers that already hold the file contents.
pub fn read_transactions<R: Read>(input: R) -> Result<Vec<Transaction>, DatasetError> {
    collect_rows(csv::Reader::from_reader(input))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Transaction>, DatasetError> {
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<Transaction>().enumerate() {
        // Record numbering is 1-based and skips the header line.
        let row = record.map_err(|source| DatasetError::MalformedRow {
            record: index + 1,
            source,
        })?;
        rows.push(row);
    }
    rows.sort_by_key(|row| row.order_date);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "customer_id,order_id,order_date,delivery_date,product_name,quantity,total_price,gender,age_group,state\n";

    #[test]
    fn reads_and_sorts_by_order_date() {
        let data = format!(
            "{HEADER}\
             C2,O2,2024-02-01 09:00:00,,Mug,1,12.50,Male,Adults,Victoria\n\
             C1,O1,2024-01-15 10:00:00,2024-01-20,T-Shirt,2,39.98,Female,Youth,Queensland\n"
        );
        let rows = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_id, "O1");
        assert_eq!(rows[0].delivery_date.unwrap().date().to_string(), "2024-01-20");
        assert!(rows[1].delivery_date.is_none());
    }

    #[test]
    fn accepts_quantity_x_column_alias() {
        let data = "customer_id,order_id,order_date,delivery_date,product_name,quantity_x,total_price,gender,age_group,state\n\
                    C1,O1,2024-01-15,,T-Shirt,3,29.97,Female,Youth,Queensland\n";
        let rows = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(rows[0].quantity, 3);
        assert_eq!(rows[0].order_date.time().to_string(), "00:00:00");
    }

    #[test]
    fn reports_the_malformed_record_position() {
        let data = format!(
            "{HEADER}\
             C1,O1,2024-01-15 10:00:00,,T-Shirt,2,39.98,Female,Youth,Queensland\n\
             C2,O2,not-a-date,,Mug,1,12.50,Male,Adults,Victoria\n"
        );
        let err = read_transactions(data.as_bytes()).unwrap_err();
        match err {
            DatasetError::MalformedRow { record, .. } => assert_eq!(record, 2),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }
}
