use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{AgeGroup, Gender};

/// A single order line item from the transaction dataset.
///
/// One order (`order_id`) may span several line items, so order counting
/// always deduplicates on `order_id`. The demographic attributes are
/// functionally determined by `customer_id` and repeat identically across
/// that customer's rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer_id: String,
    pub order_id: String,
    /// The dataset's primary time axis.
    #[serde(deserialize_with = "timestamps::deserialize")]
    pub order_date: NaiveDateTime,
    /// Present in the source file; no aggregation reads it.
    #[serde(default, deserialize_with = "timestamps::deserialize_opt")]
    pub delivery_date: Option<NaiveDateTime>,
    pub product_name: String,
    /// Units sold in this line item. `quantity_x` is the column name some
    /// merged exports of the dataset carry.
    #[serde(alias = "quantity_x")]
    pub quantity: u64,
    /// Monetary amount for this line item.
    pub total_price: Decimal,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub state: String,
}

/// Timestamp parsing for delimited source files, which carry either a full
/// `YYYY-MM-DD HH:MM:SS` value or a bare `YYYY-MM-DD` date (read as midnight).
pub mod timestamps {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, de};

    pub fn parse(text: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(text.trim())
            .ok_or_else(|| de::Error::custom(format!("unparseable timestamp: {text:?}")))
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        match text.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse(value)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unparseable timestamp: {value:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datetime_and_bare_date() {
        let full = timestamps::parse("2024-03-05 14:30:00").unwrap();
        assert_eq!(full.date().to_string(), "2024-03-05");
        let bare = timestamps::parse("2024-03-05").unwrap();
        assert_eq!(bare.time().to_string(), "00:00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(timestamps::parse("05/03/2024").is_none());
    }
}
